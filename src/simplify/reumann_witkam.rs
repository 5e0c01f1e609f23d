//! Reumann-Witkam simplification.
//!
//! Draws a key line through two points and drops every following point that
//! lies within a strip of half-width `tol` around it. The first point outside
//! the strip ends the run: the point just before it becomes a key point and
//! the line is redefined through those two points.
//!
//! For closed curves the final point is only kept when the wrap-around back
//! to the first point leaves the current strip.

use super::{Simplified, Simplifier};
use crate::distance::line_distance2;
use crate::error::SimplifyError;
use crate::primitives::Point2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::iter::Fuse;

/// Reumann-Witkam parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReumannWitkam<F> {
    tol: Tolerance<F>,
    closed: bool,
}

impl<F: Float> ReumannWitkam<F> {
    /// Creates a Reumann-Witkam filter for open polylines.
    pub fn new(tol: F) -> Result<Self, SimplifyError> {
        Self::with_closed(tol, false)
    }

    /// Creates a Reumann-Witkam filter, treating the polyline as closed if `closed` is set.
    pub fn with_closed(tol: F, closed: bool) -> Result<Self, SimplifyError> {
        Ok(Self {
            tol: Tolerance::new(tol)?,
            closed,
        })
    }

    /// Returns the validated tolerance.
    pub fn tolerance(&self) -> Tolerance<F> {
        self.tol
    }

    /// Returns `true` if the polyline is treated as closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<F: Float> Simplifier<F> for ReumannWitkam<F> {
    type Iter<I: Iterator<Item = Point2<F>>> = ReumannWitkamIter<F, I>;

    fn simplify_iter<I: Iterator<Item = Point2<F>>>(&self, points: I) -> ReumannWitkamIter<F, I> {
        ReumannWitkamIter {
            points: points.fuse(),
            tol2: self.tol.squared(),
            passthrough: self.tol.is_degenerate(),
            closed: self.closed,
            first: None,
            key: None,
            pending: None,
            tested: false,
        }
    }
}

/// Iterator over the points kept by [`ReumannWitkam`].
#[derive(Debug, Clone)]
pub struct ReumannWitkamIter<F, I> {
    points: Fuse<I>,
    tol2: F,
    passthrough: bool,
    closed: bool,
    first: Option<Point2<F>>,
    // Current key line.
    key: Option<(Point2<F>, Point2<F>)>,
    // Most recent point read but not yet kept; `None` once finished.
    pending: Option<Point2<F>>,
    // Whether any point past the second has been tested.
    tested: bool,
}

impl<F: Float, I: Iterator<Item = Point2<F>>> Iterator for ReumannWitkamIter<F, I> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        if self.passthrough {
            return self.points.next();
        }

        let Some(first) = self.first else {
            let first = self.points.next()?;
            self.first = Some(first);
            return Some(first);
        };

        if self.key.is_none() {
            let second = self.points.next()?;
            self.key = Some((first, second));
            self.pending = Some(second);
        }

        let (p0, p1) = self.key?;
        loop {
            let pi = self.pending?;
            let Some(pj) = self.points.next() else {
                self.pending = None;
                let wraps_onto_line =
                    self.closed && self.tested && line_distance2(p0, p1, first) < self.tol2;
                return if wraps_onto_line { None } else { Some(pi) };
            };

            self.tested = true;
            self.pending = Some(pj);
            if line_distance2(p0, p1, pj) < self.tol2 {
                continue;
            }

            // found the next key point
            self.key = Some((pi, pj));
            return Some(pi);
        }
    }
}

/// Reumann-Witkam simplification of an open polyline.
///
/// Calls `on_retain` for every kept point, in order. The first and last
/// points are always kept.
///
/// # Example
///
/// ```
/// use polythin::{simplify::reumann_witkam, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.1),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 3.0), // leaves the strip, (3,0) becomes a key point
/// ];
///
/// let mut kept = Vec::new();
/// reumann_witkam(points.iter().copied(), 0.5, |p| kept.push(p)).unwrap();
/// assert_eq!(kept, vec![points[0], points[3], points[4]]);
/// ```
pub fn reumann_witkam<F, P>(
    points: P,
    tol: F,
    on_retain: impl FnMut(Point2<F>),
) -> Result<(), SimplifyError>
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    reumann_witkam_closed(points, tol, false, on_retain)
}

/// Lazy, restartable form of [`reumann_witkam`].
pub fn reumann_witkam_lazy<F, S>(
    points: S,
    tol: F,
) -> Result<Simplified<S, ReumannWitkam<F>>, SimplifyError>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    reumann_witkam_closed_lazy(points, tol, false)
}

/// Reumann-Witkam simplification of a polyline that may be closed.
///
/// With `closed` set, the last point is dropped when the first point lies on
/// the final key line, since the closing edge then continues that line.
pub fn reumann_witkam_closed<F, P>(
    points: P,
    tol: F,
    closed: bool,
    on_retain: impl FnMut(Point2<F>),
) -> Result<(), SimplifyError>
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    ReumannWitkam::with_closed(tol, closed)?
        .simplify_iter(points.into_iter())
        .for_each(on_retain);
    Ok(())
}

/// Lazy, restartable form of [`reumann_witkam_closed`].
pub fn reumann_witkam_closed_lazy<F, S>(
    points: S,
    tol: F,
    closed: bool,
) -> Result<Simplified<S, ReumannWitkam<F>>, SimplifyError>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    Ok(ReumannWitkam::with_closed(tol, closed)?.lazy(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(points: &[Point2<f64>], tol: f64, closed: bool) -> Vec<Point2<f64>> {
        let mut out = Vec::new();
        reumann_witkam_closed(points.iter().copied(), tol, closed, |p| out.push(p)).unwrap();
        out
    }

    /// A square traced with three points per side, starting mid-edge so the
    /// wrap-around continues the final edge.
    fn square_mid_start() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.5),
        ]
    }

    #[test]
    fn test_reumann_witkam_straight_line() {
        let points: Vec<Point2<f64>> = (0..10).map(|i| Point2::new(i as f64, 0.0)).collect();
        assert_eq!(run(&points, 0.1, false), vec![points[0], points[9]]);
    }

    #[test]
    fn test_reumann_witkam_emits_previous_point() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 3.0),
        ];
        // (2,1) leaves the strip, so (2,0) is the key; the new line is (2,0)-(2,1)
        assert_eq!(run(&points, 0.5, false), vec![points[0], points[2], points[5]]);
    }

    #[test]
    fn test_reumann_witkam_line_through_first_two_points() {
        // The key line is defined by the first two points, whatever the tolerance
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, -1.0),
        ];
        // (2,0) leaves y = x, so (1,1) is kept; (3,-1) continues the line (1,1)-(2,0)
        assert_eq!(run(&points, 0.5, false), vec![points[0], points[1], points[3]]);
    }

    #[test]
    fn test_reumann_witkam_square_open() {
        let points = square_mid_start();
        let kept = run(&points, 0.1, false);
        assert_eq!(
            kept,
            vec![
                Point2::new(0.0, 1.0),
                Point2::new(0.0, 2.0),
                Point2::new(2.0, 2.0),
                Point2::new(2.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.5),
            ]
        );
    }

    #[test]
    fn test_reumann_witkam_closed_drops_collinear_closing_point() {
        let points = square_mid_start();
        let kept = run(&points, 0.1, true);
        // (0,0.5) lies on the edge (0,0)-(0,1) that closes the loop
        assert_eq!(kept.last(), Some(&Point2::new(0.0, 0.0)));
        assert_eq!(kept.len(), 5);
    }

    #[test]
    fn test_reumann_witkam_closed_keeps_corner_closing_point() {
        // Closing from (1,-1) back to (0,0) leaves the last line (2,0)-(1,-1)
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, -1.0),
        ];
        let open = run(&points, 0.1, false);
        let closed = run(&points, 0.1, true);
        assert_eq!(open, closed);
        assert_eq!(closed, vec![points[0], points[2], points[3]]);
    }

    #[test]
    fn test_reumann_witkam_closed_short_input_passes_through() {
        let two = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(run(&two, 0.5, true), two);
        let one = vec![Point2::new(0.0, 0.0)];
        assert_eq!(run(&one, 0.5, true), one);
        assert!(run(&[], 0.5, true).is_empty());
    }

    #[test]
    fn test_reumann_witkam_degenerate_key_line() {
        // Repeated first point: the line falls back to point distance from (0,0)
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.2, 0.0),
            Point2::new(5.0, 0.0),
        ];
        assert_eq!(run(&points, 0.5, false), vec![points[0], points[2], points[3]]);
    }

    #[test]
    fn test_reumann_witkam_zero_tolerance_is_identity() {
        let points = square_mid_start();
        assert_eq!(run(&points, 0.0, true), points);
    }

    #[test]
    fn test_reumann_witkam_lazy_matches_push() {
        let points = square_mid_start();
        for closed in [false, true] {
            let lazy = reumann_witkam_closed_lazy(points.iter().copied(), 0.1, closed).unwrap();
            assert_eq!(lazy.simplifier().is_closed(), closed);
            let pulled: Vec<_> = lazy.iter().collect();
            assert_eq!(pulled, run(&points, 0.1, closed));
            assert_eq!(pulled, lazy.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_reumann_witkam_rejects_negative_tolerance() {
        assert!(ReumannWitkam::new(-0.1_f64).is_err());
        assert!(reumann_witkam_lazy(Vec::<Point2<f64>>::new(), -2.0).is_err());
    }
}
