//! Instantiating a module on wasmtime and calling its exports by name.

use std::fmt;

use clap::ValueEnum;
use log::debug;
use wasmtime::{Engine, Instance, Module, Store};

use crate::error::HostError;

/// A binary integer export of the numeric module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    /// The plain symbol name the module exports this operation under.
    pub fn export_name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_name())
    }
}

/// An instantiated module with no imports satisfied.
pub struct ModuleRunner {
    store: Store<()>,
    instance: Instance,
}

impl ModuleRunner {
    /// Compile and instantiate `wasm`.
    ///
    /// The numeric module imports nothing, so instantiation fails for any
    /// module that does.
    pub fn new(wasm: &[u8]) -> Result<Self, HostError> {
        let engine = Engine::default();
        let module = Module::new(&engine, wasm).map_err(|reason| HostError::Engine {
            context: "failed to compile module".to_string(),
            reason,
        })?;
        let mut store = Store::new(&engine, ());
        let instance =
            Instance::new(&mut store, &module, &[]).map_err(|reason| HostError::Engine {
                context: "failed to instantiate module".to_string(),
                reason,
            })?;
        debug!("instantiated module with {} exports", module.exports().len());
        Ok(Self { store, instance })
    }

    /// Call the export `name` as `(i32, i32) -> i32`.
    pub fn call(&mut self, name: &str, a: i32, b: i32) -> Result<i32, HostError> {
        let func = self
            .instance
            .get_typed_func::<(i32, i32), i32>(&mut self.store, name)
            .map_err(|reason| HostError::Engine {
                context: format!("cannot resolve `{name}` as (i32, i32) -> i32"),
                reason,
            })?;
        let result = func
            .call(&mut self.store, (a, b))
            .map_err(|reason| HostError::Engine {
                context: format!("`{name}` trapped"),
                reason,
            })?;
        debug!("{name}({a}, {b}) = {result}");
        Ok(result)
    }

    pub fn apply(&mut self, op: Operation, a: i32, b: i32) -> Result<i32, HostError> {
        self.call(op.export_name(), a, b)
    }
}
