//! Scalar predicates with explicit tolerance.

use num_traits::Float;

/// Returns `true` if `a` and `b` differ by at most `eps`.
///
/// # Arguments
///
/// * `a`, `b` - The values to compare
/// * `eps` - Absolute tolerance
///
/// # Example
///
/// ```
/// use polythin::tolerance::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0, 1.1, 1e-3));
/// ```
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Returns `true` if `value` is within machine epsilon of zero.
///
/// This is the test used to detect degenerate squared tolerances and
/// zero-length direction vectors.
#[inline]
pub fn is_near_zero<F: Float>(value: F) -> bool {
    approx_eq(value, F::zero(), F::epsilon())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0_f64, 1.0, 0.0));
        assert!(approx_eq(1.0_f64, 1.05, 0.1));
        assert!(approx_eq(1.05_f64, 1.0, 0.1));
        assert!(!approx_eq(1.0_f64, 1.2, 0.1));
    }

    #[test]
    fn test_approx_eq_nan() {
        assert!(!approx_eq(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn test_is_near_zero() {
        assert!(is_near_zero(0.0_f64));
        assert!(is_near_zero(f64::EPSILON / 2.0));
        assert!(is_near_zero(-f64::EPSILON));
        assert!(!is_near_zero(1e-10_f64));
        assert!(is_near_zero(0.0_f32));
        assert!(!is_near_zero(1e-3_f32));
    }
}
