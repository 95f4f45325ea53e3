use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Int(u16),
    Ptr(Box<Type>),
    Array { elem: Box<Type>, len: u32 },
}

impl Type {
    pub fn ptr(pointee: Type) -> Self {
        Type::Ptr(Box::new(pointee))
    }

    pub fn array(elem: Type, len: u32) -> Self {
        Type::Array {
            elem: Box::new(elem),
            len,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    pub fn array_len(&self) -> Option<u32> {
        match self {
            Type::Array { len, .. } => Some(*len),
            _ => None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int(bits) => write!(f, "i{}", bits),
            Type::Ptr(pointee) => write!(f, "{}*", pointee),
            Type::Array { elem, len } => write!(f, "[{} x {}]", len, elem),
        }
    }
}
