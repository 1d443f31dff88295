use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::error;

use wasm_math_host::{
    load_module, numeric_module_contract, read_exports, verify_exports, HostError, ModuleRunner,
    Operation,
};

/// Inspect, verify and call compiled numeric wasm modules.
#[derive(Debug, Parser)]
#[command(name = "wasm-math-host", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every exported function with its signature.
    Inspect {
        /// Path to the compiled `.wasm` module.
        path: PathBuf,
    },
    /// Check that `add` and `multiply` are exported as `(i32, i32) -> i32`.
    Verify {
        /// Path to the compiled `.wasm` module.
        path: PathBuf,
    },
    /// Instantiate the module and call an export with two integers.
    #[command(allow_negative_numbers = true)]
    Call {
        /// Path to the compiled `.wasm` module.
        path: PathBuf,
        #[arg(value_enum)]
        op: Operation,
        a: i32,
        b: i32,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("WASM_MATH_LOG", "info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { path } => {
            let wasm = load_module(&path)?;
            let table = read_exports(&wasm)
                .with_context(|| format!("failed to read exports of {}", path.display()))?;
            if table.is_empty() {
                println!("{}: no exported functions", path.display());
            }
            for func in &table {
                println!("{func}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { path } => {
            let wasm = load_module(&path)?;
            let table = read_exports(&wasm)
                .with_context(|| format!("failed to read exports of {}", path.display()))?;
            match verify_exports(&table, &numeric_module_contract()) {
                Ok(report) => {
                    for name in &report.checked {
                        println!("ok {name}");
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(HostError::Contract { problems }) => {
                    for problem in &problems {
                        println!("FAILED {problem}");
                    }
                    error!("{} does not satisfy the export contract", path.display());
                    Ok(ExitCode::FAILURE)
                }
                Err(err) => Err(err.into()),
            }
        }
        Command::Call { path, op, a, b } => {
            let wasm = load_module(&path)?;
            let mut runner = ModuleRunner::new(&wasm)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let result = runner.apply(op, a, b)?;
            println!("{op}({a}, {b}) = {result}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
