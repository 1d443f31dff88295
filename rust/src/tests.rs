#[cfg(test)]
mod tests {
    use crate::ffi::{add, multiply};
    use rayon::prelude::*;

    const SAMPLES: [i32; 9] = [i32::MIN, -1000, -7, -1, 0, 1, 3, 1 << 20, i32::MAX];

    #[test]
    fn test_commutativity() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
                assert_eq!(multiply(a, b), multiply(b, a), "multiply({a}, {b})");
            }
        }
    }

    #[test]
    fn test_identity() {
        for &a in &SAMPLES {
            assert_eq!(add(a, 0), a);
            assert_eq!(multiply(a, 1), a);
        }
    }

    #[test]
    fn test_determinism() {
        for &a in &SAMPLES {
            assert_eq!(add(a, 17), add(a, 17));
            assert_eq!(multiply(a, 17), multiply(a, 17));
        }
    }

    #[test]
    fn test_overflow_scenario() {
        assert_eq!(add(2147483647, 1), -2147483648);
        assert_eq!(add(-2147483648, -1), 2147483647);
        assert_eq!(multiply(2147483647, 2147483647), 1);
    }

    #[test]
    fn test_concurrent_invocations() {
        // Calls share no state, so a parallel sweep must agree with a sequential one
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .expect("Failed to build thread pool");

        let inputs: Vec<(i32, i32)> = (-500i32..500)
            .map(|i| (i.wrapping_mul(4_294_967), i.wrapping_mul(-65_521)))
            .collect();

        let sequential: Vec<(i32, i32)> = inputs
            .iter()
            .map(|&(a, b)| (add(a, b), multiply(a, b)))
            .collect();

        let parallel: Vec<(i32, i32)> = pool.install(|| {
            inputs
                .par_iter()
                .map(|&(a, b)| (add(a, b), multiply(a, b)))
                .collect()
        });

        assert_eq!(sequential, parallel);
    }
}
