use crate::types::Type;
use crate::values::Value;
use serde::{Deserialize, Serialize};

/// The closed instruction set the emitter understands.
///
/// The enum is matched exhaustively everywhere it is consumed, so an
/// unsupported kind cannot exist past the type checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Instruction {
    /// Reserve storage for one element of `allocated` (or N elements for an
    /// array type); `result` holds the simulated address.
    Alloca {
        result: Value,
        allocated: Type,
    },
    Load {
        result: Value,
        source: Value,
    },
    Store {
        dest: Value,
        value: Value,
    },
    /// `indices` follows the two-operand form: a pointer-dimension index
    /// (always zero, never consulted) and the element index.
    GetElementPtr {
        result: Value,
        base: Value,
        indices: Vec<Value>,
    },
    /// Arguments are carried in the model but not marshalled at the call
    /// site; callees only receive the shared state handle.
    Call {
        result: Value,
        callee: Value,
        args: Vec<Value>,
    },
    Add {
        result: Value,
        left: Value,
        right: Value,
    },
    Sub {
        result: Value,
        left: Value,
        right: Value,
    },
    Mul {
        result: Value,
        left: Value,
        right: Value,
    },
    SDiv {
        result: Value,
        left: Value,
        right: Value,
    },
    SRem {
        result: Value,
        left: Value,
        right: Value,
    },
    ICmp {
        result: Value,
        pred: IntPredicate,
        left: Value,
        right: Value,
    },
}

impl Instruction {
    pub fn result(&self) -> Option<&Value> {
        match self {
            Instruction::Alloca { result, .. }
            | Instruction::Load { result, .. }
            | Instruction::GetElementPtr { result, .. }
            | Instruction::Call { result, .. }
            | Instruction::Add { result, .. }
            | Instruction::Sub { result, .. }
            | Instruction::Mul { result, .. }
            | Instruction::SDiv { result, .. }
            | Instruction::SRem { result, .. }
            | Instruction::ICmp { result, .. } => Some(result),
            Instruction::Store { .. } => None,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Instruction::Call { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntPredicate {
    Eq,
    Ne,
    Ugt,
    Uge,
    Ult,
    Ule,
    Sgt,
    Sge,
    Slt,
    Sle,
}

impl std::fmt::Display for IntPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IntPredicate::Eq => "eq",
            IntPredicate::Ne => "ne",
            IntPredicate::Ugt => "ugt",
            IntPredicate::Uge => "uge",
            IntPredicate::Ult => "ult",
            IntPredicate::Ule => "ule",
            IntPredicate::Sgt => "sgt",
            IntPredicate::Sge => "sge",
            IntPredicate::Slt => "slt",
            IntPredicate::Sle => "sle",
        };
        write!(f, "{}", name)
    }
}
