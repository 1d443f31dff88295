//! C FFI layer for the WebAssembly host.
//!
//! This module exports C ABI functions for a host that resolves them by name.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`, which
//! keeps them in the module's export section through LTO and dead-code
//! elimination.
//!
//! The actual logic is in the `arith` module. These functions are thin wrappers.

pub mod math;

pub use math::{add, multiply};

/// Plain symbol names a host can resolve in the compiled module.
/// Every entry has the signature `(i32, i32) -> i32`.
pub const EXPORTED_FUNCTIONS: &[&str] = &["add", "multiply"];
