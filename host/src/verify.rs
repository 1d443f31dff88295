//! Checking a module against the exports a host expects to call.

use log::{info, warn};
use wasmparser::ValType;

use crate::error::{ExportProblem, HostError};
use crate::exports::{ExportTable, Signature};

const BINARY_I32: &[ValType] = &[ValType::I32, ValType::I32];
const I32: &[ValType] = &[ValType::I32];

/// A function the host resolves by name, with the signature it calls it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedExport {
    pub name: &'static str,
    pub params: &'static [ValType],
    pub results: &'static [ValType],
}

impl ExpectedExport {
    pub fn signature(&self) -> Signature {
        Signature::new(self.params, self.results)
    }
}

/// Names that were found with the expected signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub checked: Vec<String>,
}

/// The exports of the `wasm_math` module: every name is `(i32, i32) -> i32`.
pub fn numeric_module_contract() -> Vec<ExpectedExport> {
    wasm_math::EXPORTED_FUNCTIONS
        .iter()
        .map(|&name| ExpectedExport {
            name,
            params: BINARY_I32,
            results: I32,
        })
        .collect()
}

/// Check that every expected export is present with exactly its signature.
///
/// All problems are collected before failing, so one run reports every
/// missing or mistyped function.
pub fn verify_exports(
    table: &ExportTable,
    expected: &[ExpectedExport],
) -> Result<VerifyReport, HostError> {
    let mut problems = Vec::new();
    let mut checked = Vec::with_capacity(expected.len());

    for export in expected {
        let want = export.signature();
        match table.get(export.name) {
            None => problems.push(ExportProblem::Missing {
                name: export.name.to_string(),
            }),
            Some(found) if found.signature != want => {
                problems.push(ExportProblem::SignatureMismatch {
                    name: export.name.to_string(),
                    expected: want,
                    found: found.signature.clone(),
                })
            }
            Some(_) => checked.push(export.name.to_string()),
        }
    }

    if problems.is_empty() {
        info!("all {} expected exports present", checked.len());
        Ok(VerifyReport { checked })
    } else {
        for problem in &problems {
            warn!("{problem}");
        }
        Err(HostError::Contract { problems })
    }
}
