//! Wasm Math - Numeric Function Module
//!
//! This library provides a C ABI for use by a WebAssembly host.
//! Build for `wasm32-unknown-unknown` to get the loadable module.

pub mod arith;
pub mod ffi;

pub use arith::{wrapping_add, wrapping_mul};
pub use ffi::{add, multiply, EXPORTED_FUNCTIONS};

#[cfg(test)]
mod tests;
