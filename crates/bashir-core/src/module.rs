use crate::function::Function;
use crate::{IrError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered collection of functions; insertion order is emission order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Module {
    pub functions: IndexMap<String, Function>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_function(&mut self, function: Function) -> Result<()> {
        if self.functions.contains_key(&function.name) {
            return Err(IrError::DuplicateFunction(function.name));
        }
        self.functions.insert(function.name.clone(), function);
        Ok(())
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Append another module's functions after this module's, keeping both
    /// orders. Name collisions across modules are rejected like any other
    /// duplicate.
    pub fn merge(&mut self, other: Module) -> Result<()> {
        for (_, function) in other.functions {
            self.add_function(function)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }
}
