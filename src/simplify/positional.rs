//! Positional error of a simplification.
//!
//! The positional error of an original point is its distance to the segment
//! of the simplified polyline that replaced it. These measures make it
//! possible to compare algorithms and tolerances on the same input.

use crate::distance::{point_distance2, segment_distance2};
use crate::error::SimplifyError;
use crate::primitives::Point2;
use num_traits::Float;

/// Summary statistics of positional errors (as distances, not squared).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStatistics<F> {
    /// Largest positional error.
    pub max: F,
    /// Sum of all positional errors.
    pub sum: F,
    /// Mean positional error.
    pub mean: F,
    /// Population standard deviation of the positional errors.
    pub std: F,
}

impl<F: Float> ErrorStatistics<F> {
    fn zero() -> Self {
        Self {
            max: F::zero(),
            sum: F::zero(),
            mean: F::zero(),
            std: F::zero(),
        }
    }
}

/// Computes the squared positional error of every original point.
///
/// `simplified` must start at the first and end at the last point of
/// `original`, and each interior simplified point must appear in `original`
/// in order (matched by coordinate equality). Every original point between
/// two consecutive simplified points is measured against the segment joining
/// them; kept points have zero error.
///
/// The output of a closed-curve Reumann-Witkam run may not end on the last
/// original point; append that point before measuring.
///
/// # Errors
///
/// Returns [`SimplifyError::NotASubsequence`] if the endpoints differ or an
/// interior simplified point cannot be matched.
///
/// # Example
///
/// ```
/// use polythin::{simplify::positional_errors2, Point2};
///
/// let original = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.5),
///     Point2::new(2.0, 0.0),
/// ];
/// let simplified = vec![original[0], original[2]];
///
/// let errors = positional_errors2(&original, &simplified).unwrap();
/// assert_eq!(errors, vec![0.0, 0.25, 0.0]);
/// ```
pub fn positional_errors2<F: Float>(
    original: &[Point2<F>],
    simplified: &[Point2<F>],
) -> Result<Vec<F>, SimplifyError> {
    let (Some(&first), Some(&last)) = (simplified.first(), simplified.last()) else {
        return if original.is_empty() {
            Ok(Vec::new())
        } else {
            Err(SimplifyError::NotASubsequence)
        };
    };

    if original.first() != Some(&first) || original.last() != Some(&last) {
        return Err(SimplifyError::NotASubsequence);
    }

    if simplified.len() == 1 {
        return Ok(original.iter().map(|&p| point_distance2(first, p)).collect());
    }

    let mut errors = Vec::with_capacity(original.len());
    errors.push(F::zero());

    let mut rest = original[1..].iter().copied();
    let last_segment = simplified.len() - 2;

    for (k, pair) in simplified.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);

        if k == last_segment {
            // The final segment covers everything up to the last original point
            errors.extend(rest.by_ref().map(|p| segment_distance2(a, b, p)));
            break;
        }

        loop {
            let p = rest.next().ok_or(SimplifyError::NotASubsequence)?;
            if p == b {
                errors.push(F::zero());
                break;
            }
            errors.push(segment_distance2(a, b, p));
        }
    }

    Ok(errors)
}

/// Computes max, sum, mean and standard deviation of the positional errors.
///
/// # Errors
///
/// Same as [`positional_errors2`].
pub fn positional_error_statistics<F: Float>(
    original: &[Point2<F>],
    simplified: &[Point2<F>],
) -> Result<ErrorStatistics<F>, SimplifyError> {
    let errors: Vec<F> = positional_errors2(original, simplified)?
        .into_iter()
        .map(F::sqrt)
        .collect();

    if errors.is_empty() {
        return Ok(ErrorStatistics::zero());
    }

    let count = errors.iter().fold(F::zero(), |n, _| n + F::one());
    let max = errors.iter().fold(F::zero(), |m, &e| m.max(e));
    let sum = errors.iter().fold(F::zero(), |s, &e| s + e);
    let mean = sum / count;
    let variance = errors
        .iter()
        .fold(F::zero(), |v, &e| v + (e - mean) * (e - mean))
        / count;

    Ok(ErrorStatistics {
        max,
        sum,
        mean,
        std: variance.sqrt(),
    })
}
