//! Core integer arithmetic.
//!
//! Overflow wraps per two's-complement in every build profile.
//! Plain `+` and `*` would trap on overflow in debug builds, so the
//! wrapping operations are spelled out here.
//! The FFI layer in `ffi/` calls these functions.

/// Two's-complement sum of `a` and `b`.
#[inline]
pub fn wrapping_add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Two's-complement product of `a` and `b`.
#[inline]
pub fn wrapping_mul(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_basic() {
        assert_eq!(wrapping_add(2, 3), 5);
        assert_eq!(wrapping_add(-1, 1), 0);
        assert_eq!(wrapping_add(0, 0), 0);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(wrapping_add(i32::MAX, 1), i32::MIN);
        assert_eq!(wrapping_add(i32::MIN, -1), i32::MAX);
        assert_eq!(wrapping_add(i32::MAX, i32::MAX), -2);
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(wrapping_mul(5, 3), 15);
        assert_eq!(wrapping_mul(-4, 6), -24);
        assert_eq!(wrapping_mul(7, 0), 0);
    }

    #[test]
    fn test_mul_wraps() {
        // 2^16 * 2^16 = 2^32, which is 0 mod 2^32
        assert_eq!(wrapping_mul(65536, 65536), 0);
        assert_eq!(wrapping_mul(i32::MAX, 2), -2);
        assert_eq!(wrapping_mul(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_matches_modular_arithmetic() {
        let samples = [
            i32::MIN,
            i32::MIN + 1,
            -65537,
            -1,
            0,
            1,
            46341,
            65536,
            i32::MAX - 1,
            i32::MAX,
        ];

        for &a in &samples {
            for &b in &samples {
                let sum = (a as i64 + b as i64) as i32;
                let product = (a as i64 * b as i64) as i32;
                assert_eq!(wrapping_add(a, b), sum, "add({a}, {b})");
                assert_eq!(wrapping_mul(a, b), product, "mul({a}, {b})");
            }
        }
    }
}
