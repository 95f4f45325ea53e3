/*! Core IR types and builders for compiling SSA modules to shell scripts.
 *
 * A module holds functions of basic blocks in SSA form, restricted to integer
 * scalars, integer arrays, and pointers to those. The types here are the
 * contract between whatever frontend produced the module and the Bash emitter
 * in `bashir-emit`; construction goes through the builder API or through the
 * JSON persistence layer.
 */

pub mod block;
pub mod builder;
pub mod function;
pub mod instructions;
pub mod module;
pub mod persist;
pub mod types;
pub mod values;

pub use block::{BasicBlock, BlockId, Terminator};
pub use builder::{BlockBuilder, FunctionBuilder, ModuleBuilder};
pub use function::{Function, FunctionBody, Parameter};
pub use instructions::{Instruction, IntPredicate};
pub use module::Module;
pub use types::Type;
pub use values::{Constant, Value};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrError {
    #[error("Builder error: {0}")]
    BuilderError(String),
    #[error("Duplicate function: {0}")]
    DuplicateFunction(String),
    #[error("Duplicate block: {0}")]
    DuplicateBlock(String),
    #[error("Block {0} has no terminator")]
    UnterminatedBlock(String),
}

pub type Result<T> = std::result::Result<T, IrError>;
