use std::path::PathBuf;

use thiserror::Error;
use wasmparser::BinaryReaderError;

use crate::exports::Signature;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` is not a WebAssembly module (bad magic)", path.display())]
    NotWasm { path: PathBuf },
    #[error("invalid WebAssembly module: {0}")]
    Parse(#[from] BinaryReaderError),
    #[error("export `{name}` refers to function {index}, which has no known signature")]
    DanglingExport { name: String, index: u32 },
    #[error("{context}: {reason:#}")]
    Engine {
        context: String,
        reason: wasmtime::Error,
    },
    #[error("module breaks the export contract ({} problem(s))", problems.len())]
    Contract { problems: Vec<ExportProblem> },
}

/// A single way in which a module fails to provide an expected export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportProblem {
    #[error("missing exported function `{name}`")]
    Missing { name: String },
    #[error("`{name}` has signature {found}, expected {expected}")]
    SignatureMismatch {
        name: String,
        expected: Signature,
        found: Signature,
    },
}
