use super::BlockBuilder;
use crate::{
    block::{BasicBlock, BlockId},
    function::{Function, Parameter},
    module::Module,
    types::Type,
    values::Value,
    IrError, Result,
};
use std::collections::HashSet;

pub struct FunctionBuilder<'a> {
    module: &'a mut Module,
    function: Function,
    next_value: u32,
}

impl<'a> FunctionBuilder<'a> {
    pub(crate) fn new(module: &'a mut Module, name: String) -> Self {
        Self {
            module,
            function: Function::new(name),
            next_value: 0,
        }
    }

    /// Declare a parameter. Each parameter reserves a register number so
    /// digit-named parameters and auto-numbered temporaries never collide.
    pub fn param(&mut self, name: &str, ty: Type) -> &mut Self {
        self.function.params.push(Parameter::new(name, ty));
        self.next_value += 1;
        self
    }

    pub fn get_param(&self, index: usize) -> Value {
        Value::named(&self.function.params[index].name)
    }

    pub fn create_block(&mut self, name: impl Into<String>) -> BlockId {
        self.function.body.create_block(name)
    }

    pub fn entry_block(&mut self) -> BlockBuilder<'_> {
        let id = self.function.body.entry_block;
        let next_value = &mut self.next_value;
        let block = self
            .function
            .body
            .blocks
            .entry(id)
            .or_insert_with(|| BasicBlock::new(id, "entry"));
        BlockBuilder::new(block, next_value)
    }

    pub fn block(&mut self, id: BlockId) -> Result<BlockBuilder<'_>> {
        let next_value = &mut self.next_value;
        let block = self
            .function
            .body
            .get_block_mut(id)
            .ok_or_else(|| IrError::BuilderError(format!("block {} does not exist", id)))?;
        Ok(BlockBuilder::new(block, next_value))
    }

    /// Validate the function and install it into the module: every block
    /// must be terminated and block names must be unique.
    pub fn build(self) -> Result<()> {
        let mut names = HashSet::new();
        for block in self.function.body.blocks.values() {
            if !block.is_terminated() {
                return Err(IrError::UnterminatedBlock(block.name.clone()));
            }
            if !names.insert(block.name.as_str()) {
                return Err(IrError::DuplicateBlock(block.name.clone()));
            }
        }

        self.module.add_function(self.function)
    }
}
