use crate::lower::{block_proc_name, lower_block_body};
use crate::{EmitError, EmitResult};
use bashir_core::{function::Function, module::Module};
use std::io::Write;

/// Compiles a module into a Bash program.
///
/// Each function yields its entry procedure followed by one procedure per
/// block in declaration order; the trailer declares the shared state array,
/// invokes `main`, and turns the return slot into the process exit status.
pub struct ScriptEmitter {
    module: Module,
}

impl ScriptEmitter {
    pub fn new(module: Module) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn emit_program<W: Write>(&self, writer: &mut W) -> EmitResult {
        self.emit_functions(writer)?;
        self.emit_trailer(writer)
    }

    /// Every function's procedures, in module order, without the trailer.
    /// Callers concatenating several modules emit the trailer once at the
    /// end.
    pub fn emit_functions<W: Write>(&self, writer: &mut W) -> EmitResult {
        for function in self.module.functions.values() {
            self.emit_function(function, writer)?;
        }
        Ok(())
    }

    fn emit_function<W: Write>(&self, function: &Function, writer: &mut W) -> EmitResult {
        writeln!(writer, "{}() {{", function.name)?;
        writeln!(writer, "local=${{!1}}")?;
        writeln!(
            writer,
            "{} local[@]",
            block_proc_name(function, function.entry_block())
        )?;
        writeln!(writer, "local=${{!?}}")?;
        writeln!(writer, "return local[@]")?;
        writeln!(writer, "}}")?;

        for block in function.body.blocks.values() {
            writeln!(writer, "{}() {{", block_proc_name(function, block.id))?;
            writeln!(writer, "local=${{!1}}")?;
            lower_block_body(function, block, writer)?;
            writeln!(writer, "return local[@]")?;
            writeln!(writer, "}}")?;
        }

        Ok(())
    }

    /// The invocation of `main` is unconditional; whether the module
    /// defines such a function is not checked.
    pub fn emit_trailer<W: Write>(&self, writer: &mut W) -> EmitResult {
        writeln!(writer, "declare -A local")?;
        writeln!(writer, "main local[@]")?;
        writeln!(writer, "exit ${{local[ret]}}")?;
        Ok(())
    }

    pub fn emit_to_string(&self) -> Result<String, EmitError> {
        let mut buffer = Vec::new();
        self.emit_program(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
