//! Reading the exported functions of a compiled module.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use wasmparser::{CompositeInnerType, ExternalKind, FuncType, Parser, Payload, TypeRef, ValType};

use crate::error::HostError;

const WASM_MAGIC: &[u8; 4] = b"\0asm";

/// Parameter and result types of a core wasm function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<ValType>,
    pub results: Vec<ValType>,
}

impl Signature {
    pub fn new(params: &[ValType], results: &[ValType]) -> Self {
        Self {
            params: params.to_vec(),
            results: results.to_vec(),
        }
    }
}

impl From<&FuncType> for Signature {
    fn from(ty: &FuncType) -> Self {
        Self::new(ty.params(), ty.results())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_types(f, &self.params)?;
        f.write_str(" -> ")?;
        match self.results.as_slice() {
            [single] => write!(f, "{single}"),
            results => write_types(f, results),
        }
    }
}

fn write_types(f: &mut fmt::Formatter<'_>, types: &[ValType]) -> fmt::Result {
    f.write_str("(")?;
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{ty}")?;
    }
    f.write_str(")")
}

/// A function visible in the module's export section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFunction {
    pub name: String,
    pub signature: Signature,
}

impl fmt::Display for ExportedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.signature)
    }
}

/// Exported functions, in export-section order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    functions: Vec<ExportedFunction>,
}

impl ExportTable {
    pub fn get(&self, name: &str) -> Option<&ExportedFunction> {
        self.functions.iter().find(|func| func.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|func| func.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExportedFunction> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExportTable {
    type Item = &'a ExportedFunction;
    type IntoIter = std::slice::Iter<'a, ExportedFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read a compiled module from disk.
///
/// Only the magic number is checked here; `read_exports` validates the rest.
pub fn load_module(path: impl AsRef<Path>) -> Result<Vec<u8>, HostError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if !bytes.starts_with(WASM_MAGIC) {
        return Err(HostError::NotWasm {
            path: path.to_path_buf(),
        });
    }

    debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Validate `wasm` and collect the signature of every exported function.
///
/// Imported functions occupy the low end of the function index space, ahead
/// of the functions defined in the module. Exports of memories, tables,
/// globals and tags are skipped.
pub fn read_exports(wasm: &[u8]) -> Result<ExportTable, HostError> {
    wasmparser::validate(wasm)?;

    // Indexed by type index; `None` for non-function types
    let mut types: Vec<Option<Signature>> = Vec::new();
    // Indexed by function index; holds the type index
    let mut functions: Vec<u32> = Vec::new();
    let mut exported: Vec<(String, u32)> = Vec::new();

    for payload in Parser::new(0).parse_all(wasm) {
        match payload? {
            Payload::TypeSection(reader) => {
                for group in reader {
                    for sub in group?.into_types() {
                        types.push(match &sub.composite_type.inner {
                            CompositeInnerType::Func(ty) => Some(Signature::from(ty)),
                            _ => None,
                        });
                    }
                }
            }
            Payload::ImportSection(reader) => {
                for import in reader {
                    let import = import?;
                    if let TypeRef::Func(ty) = import.ty {
                        debug!("imported function {}::{}", import.module, import.name);
                        functions.push(ty);
                    }
                }
            }
            Payload::FunctionSection(reader) => {
                for ty in reader {
                    functions.push(ty?);
                }
            }
            Payload::ExportSection(reader) => {
                for export in reader {
                    let export = export?;
                    if export.kind == ExternalKind::Func {
                        exported.push((export.name.to_string(), export.index));
                    } else {
                        debug!("skipping non-function export `{}`", export.name);
                    }
                }
            }
            _ => {}
        }
    }

    let mut table = ExportTable::default();
    for (name, index) in exported {
        let signature = functions
            .get(index as usize)
            .and_then(|&ty| types.get(ty as usize))
            .and_then(|sig| sig.clone());
        let Some(signature) = signature else {
            return Err(HostError::DanglingExport { name, index });
        };
        debug!("export `{name}` -> function {index}: {signature}");
        table.functions.push(ExportedFunction { name, signature });
    }

    Ok(table)
}
