//! Small numeric helpers used by the demos.

use std::ops::Mul;

/// `x * x` for any type that can multiply with itself.
#[inline]
pub fn square<T: Copy + Mul<Output = T>>(x: T) -> T {
    x * x
}

/// Arithmetic mean of a non-empty slice.
///
/// # Panics
///
/// Panics on an empty slice. Dividing by a zero length is a fault and must
/// stay one - it does not get to decay into a silent `NaN`.
pub fn average(values: &[f64]) -> f64 {
    assert!(
        !values.is_empty(),
        "average of an empty sequence divides by zero"
    );
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod test_numeric {
    use rand::Rng;
    use super::*;

    #[test]
    fn square_integers() {
        assert_eq!(square(5), 25);
        assert_eq!(square(-3), 9);
        assert_eq!(square(0u64), 0);
    }

    #[test]
    fn square_floats() {
        assert_eq!(square(1.5f64), 2.25);
    }

    #[test]
    fn average_small() {
        assert_eq!(average(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(average(&[7.0]), 7.0);
    }

    #[test]
    fn average_of_constant_is_constant() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let c: f64 = rng.gen_range(-100.0..100.0);
            let len = rng.gen_range(1..64);
            assert!((average(&vec![c; len]) - c).abs() < 1.0e-9);
        }
    }

    #[test]
    #[should_panic(expected = "empty sequence")]
    fn average_empty_panics() {
        average(&[]);
    }
}
