use crate::{
    block::{BasicBlock, BlockId, Terminator},
    instructions::{Instruction, IntPredicate},
    types::Type,
    values::Value,
};

pub struct BlockBuilder<'a> {
    block: &'a mut BasicBlock,
    next_value: &'a mut u32,
}

impl<'a> BlockBuilder<'a> {
    pub(crate) fn new(block: &'a mut BasicBlock, next_value: &'a mut u32) -> Self {
        Self { block, next_value }
    }

    fn fresh_value(&mut self) -> Value {
        let value = Value::named(self.next_value.to_string());
        *self.next_value += 1;
        value
    }

    pub fn alloca(&mut self, allocated: Type) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::Alloca {
            result: result.clone(),
            allocated,
        });
        result
    }

    pub fn load(&mut self, source: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::Load {
            result: result.clone(),
            source,
        });
        result
    }

    pub fn store(&mut self, dest: Value, value: Value) {
        self.block.add_instruction(Instruction::Store { dest, value });
    }

    pub fn gep(&mut self, base: Value, indices: Vec<Value>) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::GetElementPtr {
            result: result.clone(),
            base,
            indices,
        });
        result
    }

    pub fn call(&mut self, callee: Value, args: Vec<Value>) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::Call {
            result: result.clone(),
            callee,
            args,
        });
        result
    }

    pub fn add(&mut self, left: Value, right: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::Add {
            result: result.clone(),
            left,
            right,
        });
        result
    }

    pub fn sub(&mut self, left: Value, right: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::Sub {
            result: result.clone(),
            left,
            right,
        });
        result
    }

    pub fn mul(&mut self, left: Value, right: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::Mul {
            result: result.clone(),
            left,
            right,
        });
        result
    }

    pub fn sdiv(&mut self, left: Value, right: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::SDiv {
            result: result.clone(),
            left,
            right,
        });
        result
    }

    pub fn srem(&mut self, left: Value, right: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::SRem {
            result: result.clone(),
            left,
            right,
        });
        result
    }

    pub fn icmp(&mut self, pred: IntPredicate, left: Value, right: Value) -> Value {
        let result = self.fresh_value();
        self.block.add_instruction(Instruction::ICmp {
            result: result.clone(),
            pred,
            left,
            right,
        });
        result
    }

    pub fn ret(&mut self, value: Value) {
        self.block.set_terminator(Terminator::Return(value));
    }

    pub fn jump(&mut self, target: BlockId) {
        self.block.set_terminator(Terminator::Jump(target));
    }

    pub fn branch(&mut self, condition: Value, then_block: BlockId, else_block: BlockId) {
        self.block.set_terminator(Terminator::Branch {
            condition,
            then_block,
            else_block,
        });
    }
}
