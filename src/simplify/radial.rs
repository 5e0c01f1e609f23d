//! Radial distance simplification.
//!
//! A fast O(n) simplification algorithm that removes points within a specified
//! distance of the last kept point. Useful for filtering GPS jitter and
//! reducing point density in streaming data.

use super::{Simplified, Simplifier};
use crate::distance::point_distance2;
use crate::error::SimplifyError;
use crate::primitives::Point2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::iter::Fuse;

/// Radial distance simplification parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialDistance<F> {
    tol: Tolerance<F>,
}

impl<F: Float> RadialDistance<F> {
    /// Creates a radial distance filter.
    ///
    /// Returns an error if `tol` is negative or NaN.
    pub fn new(tol: F) -> Result<Self, SimplifyError> {
        Ok(Self {
            tol: Tolerance::new(tol)?,
        })
    }

    /// Returns the validated tolerance.
    pub fn tolerance(&self) -> Tolerance<F> {
        self.tol
    }
}

impl<F: Float> Simplifier<F> for RadialDistance<F> {
    type Iter<I: Iterator<Item = Point2<F>>> = RadialDistanceIter<F, I>;

    fn simplify_iter<I: Iterator<Item = Point2<F>>>(&self, points: I) -> RadialDistanceIter<F, I> {
        RadialDistanceIter {
            points: points.fuse(),
            tol2: self.tol.squared(),
            passthrough: self.tol.is_degenerate(),
            anchor: None,
            pending: None,
        }
    }
}

/// Iterator over the points kept by [`RadialDistance`].
#[derive(Debug, Clone)]
pub struct RadialDistanceIter<F, I> {
    points: Fuse<I>,
    tol2: F,
    passthrough: bool,
    anchor: Option<Point2<F>>,
    pending: Option<Point2<F>>,
}

impl<F: Float, I: Iterator<Item = Point2<F>>> Iterator for RadialDistanceIter<F, I> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        if self.passthrough {
            return self.points.next();
        }

        for point in self.points.by_ref() {
            match self.anchor {
                Some(anchor) if point_distance2(anchor, point) < self.tol2 => {
                    self.pending = Some(point);
                }
                _ => {
                    self.anchor = Some(point);
                    self.pending = None;
                    return Some(point);
                }
            }
        }

        // Always keep last point
        self.pending.take()
    }
}

/// Simplifies a polyline by removing points within `tol` of the last kept point.
///
/// Walks the points once and calls `on_retain` for the first point, every
/// point at least `tol` away from the previously kept one, and the last point.
///
/// # Arguments
///
/// * `points` - The input polyline
/// * `tol` - Minimum distance between consecutive kept points
/// * `on_retain` - Called once per kept point, in order
///
/// # Example
///
/// ```
/// use polythin::simplify::radial_distance;
/// use polythin::Point2;
///
/// // Points with some close together
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0),  // Too close, will be removed
///     Point2::new(0.2, 0.0),  // Too close, will be removed
///     Point2::new(1.0, 0.0),  // Far enough, kept
///     Point2::new(1.05, 0.0), // Too close, will be removed
///     Point2::new(2.0, 0.0),  // Far enough, kept
/// ];
///
/// let mut simplified = Vec::new();
/// radial_distance(points, 0.5, |p| simplified.push(p)).unwrap();
/// assert_eq!(simplified.len(), 3); // First, 1.0, and last
/// ```
pub fn radial_distance<F, P>(
    points: P,
    tol: F,
    on_retain: impl FnMut(Point2<F>),
) -> Result<(), SimplifyError>
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    RadialDistance::new(tol)?
        .simplify_iter(points.into_iter())
        .for_each(on_retain);
    Ok(())
}

/// Lazy, restartable form of [`radial_distance`].
///
/// The tolerance is validated immediately; the points are not read until the
/// result is iterated.
pub fn radial_distance_lazy<F, S>(
    points: S,
    tol: F,
) -> Result<Simplified<S, RadialDistance<F>>, SimplifyError>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    Ok(RadialDistance::new(tol)?.lazy(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radial(points: &[Point2<f64>], tol: f64) -> Vec<Point2<f64>> {
        RadialDistance::new(tol).unwrap().simplify(points.iter().copied())
    }

    #[test]
    fn test_radial_basic() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.2, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.05, 0.0),
            Point2::new(2.0, 0.0),
        ];

        let simplified = radial(&points, 0.5);

        // Should keep: first (0,0), (1,0), and last (2,0)
        assert_eq!(simplified.len(), 3);
        assert_eq!(simplified[0], points[0]);
        assert_eq!(simplified[1], points[3]); // (1, 0)
        assert_eq!(simplified[2], points[5]); // (2, 0)
    }

    #[test]
    fn test_radial_preserves_endpoints() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.01, 0.0),
            Point2::new(0.02, 0.0),
        ];

        let simplified = radial(&points, 1.0);

        // Even though all points are close, first and last are kept
        assert_eq!(simplified.len(), 2);
        assert_eq!(simplified[0], points[0]);
        assert_eq!(simplified[1], points[2]);
    }

    #[test]
    fn test_radial_straight_line_collapses() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];

        assert_eq!(radial(&points, 5.0), vec![points[0], points[3]]);
        // Unit spacing is not within a 0.5 radius, nothing is dropped
        assert_eq!(radial(&points, 0.5), points);
    }

    #[test]
    fn test_radial_boundary_is_kept() {
        // A point exactly at the tolerance distance is kept
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.5, 0.0),
            Point2::new(3.0, 0.0),
        ];
        assert_eq!(radial(&points, 2.0), vec![points[0], points[1], points[3]]);
    }

    #[test]
    fn test_radial_empty_and_small() {
        let empty: Vec<Point2<f64>> = vec![];
        assert_eq!(radial(&empty, 1.0).len(), 0);

        let single = vec![Point2::new(0.0, 0.0)];
        assert_eq!(radial(&single, 1.0).len(), 1);

        let two = vec![Point2::new(0.0, 0.0), Point2::new(0.1, 0.0)];
        assert_eq!(radial(&two, 1.0).len(), 2);
    }

    #[test]
    fn test_radial_zero_tolerance_is_identity() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1e-12, 0.0),
        ];
        assert_eq!(radial(&points, 0.0), points);
    }

    #[test]
    fn test_radial_diagonal_movement() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.5), // Distance ~0.707
            Point2::new(1.0, 1.0), // Distance ~1.414 from (0,0)
            Point2::new(2.0, 2.0), // Distance ~1.414 from previous
        ];

        let simplified = radial(&points, 1.0);
        assert_eq!(simplified, vec![points[0], points[2], points[3]]);
    }

    #[test]
    fn test_radial_rejects_negative_tolerance() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let mut called = false;
        let result = radial_distance(points.iter().copied(), -1.0, |_| called = true);
        assert!(matches!(result, Err(SimplifyError::InvalidTolerance { .. })));
        assert!(!called);
        assert!(radial_distance_lazy(points.iter().copied(), f64::NAN).is_err());
    }

    #[test]
    fn test_radial_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(1.0, 0.0),
        ];

        let mut simplified = Vec::new();
        radial_distance(points, 0.5_f32, |p| simplified.push(p)).unwrap();
        assert_eq!(simplified.len(), 2);
    }
}
