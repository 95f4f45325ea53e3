/*! Lower IR modules into runnable Bash programs.
 *
 * Every basic block becomes a shell function, every IR function an entry
 * shell function forwarding into its entry block, and all of them thread one
 * associative array (`local`) by reference: a procedure receives the array
 * name in `$1`, mutates it, and hands it back through its return. The
 * emitted text is deliberately stable; tooling downstream diffs it.
 */

pub mod lower;
pub mod resolver;
pub mod script;

pub use lower::{lower_block_body, lower_instruction, lower_terminator, predicate_keyword};
pub use resolver::{lvalue, rvalue};
pub use script::ScriptEmitter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("getelementptr index does not resolve to an integer: {0:?}")]
    MalformedIndex(String),
    #[error("block {0} has no terminator")]
    MissingTerminator(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type EmitResult = std::result::Result<(), EmitError>;
