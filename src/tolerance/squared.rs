//! Validated, pre-squared distance tolerances.

use super::predicates::is_near_zero;
use crate::error::SimplifyError;
use num_traits::Float;
use tracing::debug;

/// A non-negative distance tolerance, squared once at construction.
///
/// All distance comparisons in the simplification algorithms are done on
/// squared distances, so the square root is never taken.
///
/// # Example
///
/// ```
/// use polythin::tolerance::Tolerance;
///
/// let tol = Tolerance::new(0.5_f64).unwrap();
/// assert_eq!(tol.squared(), 0.25);
/// assert!(!tol.is_degenerate());
///
/// assert!(Tolerance::new(-1.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    squared: F,
}

impl<F: Float> Tolerance<F> {
    /// Validates `tol` and squares it.
    ///
    /// Returns [`SimplifyError::InvalidTolerance`] if `tol` is negative or NaN.
    pub fn new(tol: F) -> Result<Self, SimplifyError> {
        Self::named("tol", tol)
    }

    /// Like [`Tolerance::new`], reporting `name` as the offending parameter.
    pub fn named(name: &'static str, tol: F) -> Result<Self, SimplifyError> {
        if tol.is_nan() || tol < F::zero() {
            let value = tol.to_f64().unwrap_or(f64::NAN);
            debug!(name, value, "rejected tolerance");
            return Err(SimplifyError::InvalidTolerance { name, value });
        }
        Ok(Self { squared: tol * tol })
    }

    /// Returns the squared tolerance.
    #[inline]
    pub fn squared(self) -> F {
        self.squared
    }

    /// Returns `true` if the squared tolerance is within epsilon of zero.
    ///
    /// A degenerate tolerance means "no simplification".
    #[inline]
    pub fn is_degenerate(self) -> bool {
        is_near_zero(self.squared)
    }
}
