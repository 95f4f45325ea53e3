use serde::{Deserialize, Serialize};

/// An SSA value: either a named virtual register or a literal constant.
///
/// Named values are defined exactly once by the instruction (or parameter)
/// that owns the name; the single-definition rule is the frontend's contract
/// and is not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Named(String),
    Constant(Constant),
}

impl Value {
    pub fn named(name: impl Into<String>) -> Self {
        Value::Named(name.into())
    }

    pub fn int(value: i64) -> Self {
        Value::Constant(Constant::Int(value))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Value::Named(name) => Some(name),
            Value::Constant(_) => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Value::Constant(_))
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Value::Constant(c) => Some(c),
            Value::Named(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Named(name) => write!(f, "%{}", name),
            Value::Constant(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constant {
    Int(i64),
    Bool(bool),
    Null,
}

impl Constant {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Constant::Int(value) => Some(*value),
            Constant::Bool(b) => Some(if *b { 1 } else { 0 }),
            Constant::Null => None,
        }
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::Int(value) => write!(f, "{}", value),
            Constant::Bool(b) => write!(f, "{}", b),
            Constant::Null => write!(f, "null"),
        }
    }
}
