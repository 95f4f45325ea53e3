use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bashir")]
#[command(about = "bashir - compile SSA IR modules to Bash programs")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile one or more module files into a single Bash program
    Compile {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize the functions and blocks of a module file
    Inspect {
        input: PathBuf,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            inputs,
            output,
            verbose,
        } => cmd_compile(inputs, output, verbose),
        Commands::Inspect { input, verbose } => cmd_inspect(input, verbose),
    }
}

fn cmd_compile(inputs: Vec<PathBuf>, output: Option<PathBuf>, verbose: bool) -> Result<()> {
    use bashir_core::persist::load_module;
    use bashir_core::Module;
    use bashir_emit::ScriptEmitter;
    use colored::*;
    use std::fs;
    use std::time::Instant;

    if verbose {
        println!("{}", "bashir compiler".bright_blue().bold());
        println!("{}", "=".repeat(50).bright_blue());
        for input in &inputs {
            println!(" Input: {}", input.display());
        }
        if let Some(ref out) = output {
            println!(" Output: {}", out.display());
        }
        println!();
    }

    let start = Instant::now();

    let mut module = Module::new();
    for input in &inputs {
        if verbose {
            println!(" Loading {}...", input.display());
        }
        module.merge(load_module(input)?)?;
    }

    if module.is_empty() {
        println!("{}", " No functions found in input".yellow());
        return Ok(());
    }

    if verbose {
        println!(" Emitting Bash program...");
    }

    let emitter = ScriptEmitter::new(module);
    let script = emitter.emit_to_string()?;

    if let Some(output_path) = output {
        fs::write(&output_path, &script)?;
        if verbose {
            let elapsed = start.elapsed();
            println!(
                "\n {} Compilation successful!",
                "SUCCESS:".bright_green().bold()
            );
            println!("   Time: {:.3}s", elapsed.as_secs_f64());
            println!("   Output: {}", output_path.display());
        }
    } else {
        print!("{}", script);
    }

    Ok(())
}

fn cmd_inspect(input: PathBuf, verbose: bool) -> Result<()> {
    use bashir_core::persist::load_module;
    use colored::*;

    let module = load_module(&input)?;

    if module.is_empty() {
        println!(" No functions found");
        return Ok(());
    }

    println!(" Found {} function(s)\n", module.len());

    for (name, function) in &module.functions {
        println!("{}", format!(" Function: {}", name).bright_green().bold());
        println!("   Parameters: {}", function.params.len());
        println!("   Blocks: {}", function.body.blocks.len());

        if verbose {
            for block in function.body.blocks.values() {
                println!(
                    "     Block {}: {} instructions, {} successor(s)",
                    block.name,
                    block.instructions.len(),
                    block.successors().len()
                );
            }
        }

        println!();
    }

    Ok(())
}
