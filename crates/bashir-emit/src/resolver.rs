use bashir_core::values::{Constant, Value};

/// Identifier of the storage location to assign when `value` is being
/// defined. Named values key into the shared `local` array; integer
/// constants are their own text.
pub fn lvalue(value: &Value) -> String {
    match value {
        Value::Named(name) => format!("local[r{}]", name),
        Value::Constant(constant) => constant_text(constant),
    }
}

/// Expression reading `value`'s current contents: a dereference of the same
/// key `lvalue` assigns.
pub fn rvalue(value: &Value) -> String {
    match value {
        Value::Named(name) => format!("${{local[r{}]}}", name),
        Value::Constant(constant) => constant_text(constant),
    }
}

fn constant_text(constant: &Constant) -> String {
    match constant {
        Constant::Int(value) => value.to_string(),
        // the empty string marks an unsupported constant kind, not a zero;
        // callers treat it as a defect signal
        Constant::Bool(_) | Constant::Null => String::new(),
    }
}
