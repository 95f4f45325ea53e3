use crate::resolver::{lvalue, rvalue};
use crate::{EmitError, EmitResult};
use bashir_core::{
    block::{BasicBlock, BlockId, Terminator},
    function::Function,
    instructions::{Instruction, IntPredicate},
    types::Type,
    values::Value,
};
use std::io::Write;

/// Name of the shell procedure compiled from a block: the `_br` prefix, the
/// owning function's name, and the block's name, concatenated.
pub fn block_proc_name(function: &Function, target: BlockId) -> String {
    format!(
        "_br{}{}",
        function.name,
        function.block_name(target).unwrap_or_default()
    )
}

/// Lower a block's instructions in order, then its terminator.
pub fn lower_block_body<W: Write>(
    function: &Function,
    block: &BasicBlock,
    writer: &mut W,
) -> EmitResult {
    for inst in &block.instructions {
        lower_instruction(inst, writer)?;
    }
    lower_terminator(function, block, writer)
}

pub fn lower_instruction<W: Write>(inst: &Instruction, writer: &mut W) -> EmitResult {
    match inst {
        Instruction::Alloca { result, allocated } => lower_alloca(result, allocated, writer),
        Instruction::Load { result, source } => {
            writeln!(writer, "{}=${{local[{}]}}", lvalue(result), rvalue(source))?;
            Ok(())
        }
        Instruction::Store { dest, value } => {
            writeln!(writer, "local[{}]={}", rvalue(dest), rvalue(value))?;
            Ok(())
        }
        Instruction::GetElementPtr {
            result,
            base,
            indices,
        } => {
            let index = element_index(indices)?;
            writeln!(writer, "{}={}_{}", lvalue(result), rvalue(base), index)?;
            Ok(())
        }
        Instruction::Call { callee, .. } => {
            // only the shared state handle is forwarded; the argument list
            // is not marshalled
            writeln!(writer, "{} local[@]", lvalue(callee))?;
            writeln!(writer)?;
            Ok(())
        }
        Instruction::Add {
            result,
            left,
            right,
        } => lower_binary(result, left, right, "+", writer),
        Instruction::Sub {
            result,
            left,
            right,
        } => lower_binary(result, left, right, "-", writer),
        Instruction::Mul {
            result,
            left,
            right,
        } => lower_binary(result, left, right, "\\*", writer),
        Instruction::SDiv {
            result,
            left,
            right,
        } => lower_binary(result, left, right, "/", writer),
        Instruction::SRem {
            result,
            left,
            right,
        } => lower_binary(result, left, right, "%", writer),
        Instruction::ICmp {
            result,
            pred,
            left,
            right,
        } => {
            writeln!(
                writer,
                "{}=`if [ \"{}\" -{} \"{}\" ]; then echo false; else echo true; fi`",
                lvalue(result),
                rvalue(left),
                predicate_keyword(*pred),
                rvalue(right)
            )?;
            Ok(())
        }
    }
}

/// Keyword the generated `[` test uses for an integer comparison. The
/// unsigned forms are unmapped and take the `eq` fallback.
pub fn predicate_keyword(pred: IntPredicate) -> &'static str {
    match pred {
        IntPredicate::Eq => "eq",
        IntPredicate::Ne => "neq",
        IntPredicate::Sgt => "gt",
        IntPredicate::Sge => "ge",
        IntPredicate::Slt => "lt",
        IntPredicate::Sle => "le",
        IntPredicate::Ugt | IntPredicate::Uge | IntPredicate::Ult | IntPredicate::Ule => "eq",
    }
}

fn lower_alloca<W: Write>(result: &Value, allocated: &Type, writer: &mut W) -> EmitResult {
    let name = result.name().unwrap_or_default();
    match allocated {
        Type::Array { len, .. } => {
            // one slot per element; the register holds the bare base alias
            // so getelementptr can append `_<index>` to it
            for idx in 0..*len {
                write!(writer, "local[s{}_{}]=0;", name, idx)?;
            }
            writeln!(writer, "\n{}=s{}", lvalue(result), name)?;
        }
        Type::Int(_) | Type::Ptr(_) => {
            writeln!(writer, "local[s{}]=0", name)?;
            writeln!(writer, "{}=local[s{}]", lvalue(result), name)?;
        }
    }
    Ok(())
}

fn lower_binary<W: Write>(
    result: &Value,
    left: &Value,
    right: &Value,
    op: &str,
    writer: &mut W,
) -> EmitResult {
    writeln!(
        writer,
        "{}=$(expr {} {} {})",
        lvalue(result),
        rvalue(left),
        op,
        rvalue(right)
    )?;
    Ok(())
}

/// The element index of a getelementptr: the second operand, which must
/// resolve to text parseable as a base-10 integer. The first operand is the
/// pointer-dimension index and is never consulted.
fn element_index(indices: &[Value]) -> Result<i64, EmitError> {
    let index = indices
        .get(1)
        .ok_or_else(|| EmitError::MalformedIndex("missing element index".to_string()))?;

    let text = rvalue(index);
    text.parse::<i64>()
        .map_err(|_| EmitError::MalformedIndex(text))
}

pub fn lower_terminator<W: Write>(
    function: &Function,
    block: &BasicBlock,
    writer: &mut W,
) -> EmitResult {
    match &block.terminator {
        Terminator::Return(value) => {
            writeln!(writer, "local[ret]={}", rvalue(value))?;
            Ok(())
        }
        Terminator::Jump(target) => {
            writeln!(writer, "{} local[@]", block_proc_name(function, *target))?;
            writeln!(writer, "local=${{!?}}")?;
            Ok(())
        }
        Terminator::Branch {
            condition,
            then_block,
            else_block,
        } => {
            writeln!(
                writer,
                "if [ $r{} ]; then {} local[@]; else {} local[@]; fi",
                lvalue(condition),
                block_proc_name(function, *then_block),
                block_proc_name(function, *else_block)
            )?;
            writeln!(writer, "local=${{!?}}")?;

            // the then-side successor is chased one unconditional jump
            // further; the else side never is
            if let Some(Terminator::Jump(chained)) = function
                .body
                .get_block(*then_block)
                .map(|block| &block.terminator)
            {
                writeln!(writer, "{} local[@]", block_proc_name(function, *chained))?;
            }
            writeln!(writer, "local=${{!?}}")?;
            Ok(())
        }
        Terminator::Invalid => Err(EmitError::MissingTerminator(block.name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lowered(inst: &Instruction) -> String {
        let mut buffer = Vec::new();
        lower_instruction(inst, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn scalar_alloca_emits_slot_and_alias() {
        let inst = Instruction::Alloca {
            result: Value::named("x"),
            allocated: Type::Int(32),
        };
        assert_eq!(lowered(&inst), "local[sx]=0\nlocal[rx]=local[sx]\n");
        assert_eq!(lowered(&inst).split('\n').filter(|s| !s.is_empty()).count(), 2);
    }

    #[test]
    fn array_alloca_emits_one_slot_per_element() {
        let inst = Instruction::Alloca {
            result: Value::named("a"),
            allocated: Type::array(Type::Int(32), 3),
        };
        assert_eq!(
            lowered(&inst),
            "local[sa_0]=0;local[sa_1]=0;local[sa_2]=0;\nlocal[ra]=sa\n"
        );

        // N slot initializations plus the alias assignment
        let statements = lowered(&inst)
            .split(['\n', ';'])
            .filter(|s| !s.is_empty())
            .count();
        assert_eq!(statements, 4);
    }

    #[test]
    fn load_dereferences_the_slot_named_by_the_source() {
        let inst = Instruction::Load {
            result: Value::named("2"),
            source: Value::named("1"),
        };
        assert_eq!(lowered(&inst), "local[r2]=${local[${local[r1]}]}\n");
    }

    #[test]
    fn store_assigns_into_the_slot_named_by_the_dest() {
        let inst = Instruction::Store {
            dest: Value::named("1"),
            value: Value::int(42),
        };
        assert_eq!(lowered(&inst), "local[${local[r1]}]=42\n");
    }

    #[test]
    fn gep_concatenates_base_and_integer_index() {
        let inst = Instruction::GetElementPtr {
            result: Value::named("3"),
            base: Value::named("1"),
            indices: vec![Value::int(0), Value::int(2)],
        };
        assert_eq!(lowered(&inst), "local[r3]=${local[r1]}_2\n");
    }

    #[test]
    fn gep_ignores_the_first_index() {
        // the pointer-dimension operand is never consulted, even when it is
        // not an integer
        let inst = Instruction::GetElementPtr {
            result: Value::named("3"),
            base: Value::named("1"),
            indices: vec![Value::named("junk"), Value::int(0)],
        };
        assert_eq!(lowered(&inst), "local[r3]=${local[r1]}_0\n");
    }

    #[test]
    fn gep_with_non_integer_index_is_fatal_and_emits_nothing() {
        let inst = Instruction::GetElementPtr {
            result: Value::named("3"),
            base: Value::named("1"),
            indices: vec![Value::int(0), Value::named("i")],
        };

        let mut buffer = Vec::new();
        let err = lower_instruction(&inst, &mut buffer).unwrap_err();
        assert!(matches!(err, EmitError::MalformedIndex(_)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn gep_with_a_single_index_is_fatal() {
        let inst = Instruction::GetElementPtr {
            result: Value::named("3"),
            base: Value::named("1"),
            indices: vec![Value::int(0)],
        };

        let mut buffer = Vec::new();
        let err = lower_instruction(&inst, &mut buffer).unwrap_err();
        assert!(matches!(err, EmitError::MalformedIndex(_)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn call_forwards_only_the_state_handle() {
        let inst = Instruction::Call {
            result: Value::named("4"),
            callee: Value::named("helper"),
            args: vec![Value::int(1), Value::int(2)],
        };
        assert_eq!(lowered(&inst), "local[rhelper] local[@]\n\n");
    }

    #[test]
    fn arithmetic_lowers_to_expr_substitutions() {
        let left = Value::named("0");
        let right = Value::int(5);
        let cases = [
            (
                Instruction::Add {
                    result: Value::named("1"),
                    left: left.clone(),
                    right: right.clone(),
                },
                "local[r1]=$(expr ${local[r0]} + 5)\n",
            ),
            (
                Instruction::Sub {
                    result: Value::named("1"),
                    left: left.clone(),
                    right: right.clone(),
                },
                "local[r1]=$(expr ${local[r0]} - 5)\n",
            ),
            (
                Instruction::Mul {
                    result: Value::named("1"),
                    left: left.clone(),
                    right: right.clone(),
                },
                "local[r1]=$(expr ${local[r0]} \\* 5)\n",
            ),
            (
                Instruction::SDiv {
                    result: Value::named("1"),
                    left: left.clone(),
                    right: right.clone(),
                },
                "local[r1]=$(expr ${local[r0]} / 5)\n",
            ),
            (
                Instruction::SRem {
                    result: Value::named("1"),
                    left: left.clone(),
                    right: right.clone(),
                },
                "local[r1]=$(expr ${local[r0]} % 5)\n",
            ),
        ];

        for (inst, expected) in cases {
            assert_eq!(lowered(&inst), expected);
        }
    }

    #[test]
    fn icmp_tests_with_the_negated_sense() {
        let inst = Instruction::ICmp {
            result: Value::named("2"),
            pred: IntPredicate::Slt,
            left: Value::named("0"),
            right: Value::int(10),
        };
        assert_eq!(
            lowered(&inst),
            "local[r2]=`if [ \"${local[r0]}\" -lt \"10\" ]; then echo false; else echo true; fi`\n"
        );
    }

    #[test]
    fn signed_predicates_map_to_their_keywords() {
        assert_eq!(predicate_keyword(IntPredicate::Eq), "eq");
        assert_eq!(predicate_keyword(IntPredicate::Ne), "neq");
        assert_eq!(predicate_keyword(IntPredicate::Sgt), "gt");
        assert_eq!(predicate_keyword(IntPredicate::Sge), "ge");
        assert_eq!(predicate_keyword(IntPredicate::Slt), "lt");
        assert_eq!(predicate_keyword(IntPredicate::Sle), "le");
    }

    #[test]
    fn unsigned_predicates_degrade_to_eq() {
        // pinned: the unsigned forms share the eq fallback, and changing
        // that changes every emitted comparison using them
        for pred in [
            IntPredicate::Ugt,
            IntPredicate::Uge,
            IntPredicate::Ult,
            IntPredicate::Ule,
        ] {
            assert_eq!(predicate_keyword(pred), "eq");
        }
    }
}
