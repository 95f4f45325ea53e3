/*! Unified interface for compiling IR modules to Bash.
 *
 * Single import for everything you need: building or loading a module and
 * emitting the shell program for it.
 */

pub use bashir_core as core;
pub use bashir_emit as emit;

pub use bashir_core::{
    block::{BasicBlock, BlockId, Terminator},
    builder::{BlockBuilder, FunctionBuilder, ModuleBuilder},
    function::{Function, FunctionBody, Parameter},
    instructions::{Instruction, IntPredicate},
    module::Module,
    types::Type,
    values::{Constant, Value},
};

pub use bashir_emit::{EmitError, ScriptEmitter};
