//! Host-side loader for the numeric wasm module.
//!
//! Reads a compiled module, lists the functions it exports, checks that the
//! functions promised by `wasm_math` are present under their plain names with
//! the expected signatures, and calls them on wasmtime.

pub mod error;
pub mod exports;
pub mod runner;
pub mod verify;

pub use error::{ExportProblem, HostError};
pub use exports::{load_module, read_exports, ExportTable, ExportedFunction, Signature};
pub use runner::{ModuleRunner, Operation};
pub use verify::{numeric_module_contract, verify_exports, ExpectedExport, VerifyReport};
