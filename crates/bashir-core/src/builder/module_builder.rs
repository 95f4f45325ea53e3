use super::FunctionBuilder;
use crate::module::Module;

pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self {
            module: Module::new(),
        }
    }

    /// Start a function; it is installed into the module when the returned
    /// builder's `build()` succeeds.
    pub fn function(&mut self, name: impl Into<String>) -> FunctionBuilder<'_> {
        FunctionBuilder::new(&mut self.module, name.into())
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn build(self) -> Module {
        self.module
    }
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
