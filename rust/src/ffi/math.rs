//! Exported integer arithmetic.

use crate::arith::{wrapping_add, wrapping_mul};

/// Adds two integers.
///
/// # Returns
/// The two's-complement sum. Overflow wraps silently.
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    wrapping_add(a, b)
}

/// Multiplies two integers.
///
/// # Returns
/// The two's-complement product. Overflow wraps silently.
#[no_mangle]
pub extern "C" fn multiply(a: i32, b: i32) -> i32 {
    wrapping_mul(a, b)
}
