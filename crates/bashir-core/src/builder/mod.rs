/*! Programmatic construction of IR modules.
 *
 * The emitter assumes a fully-typed module; this builder is the in-process
 * frontend that produces one. Result registers are auto-numbered per
 * function in the style of unnamed SSA temporaries.
 */

mod block_builder;
mod function_builder;
mod module_builder;

pub use block_builder::BlockBuilder;
pub use function_builder::FunctionBuilder;
pub use module_builder::ModuleBuilder;
