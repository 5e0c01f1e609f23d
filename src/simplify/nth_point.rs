//! Nth-point simplification.
//!
//! Keeps the first point, every nth point after it, and the last point.
//! The fastest and crudest member of the family: it looks at positions only,
//! never at geometry.

use super::{Simplified, Simplifier};
use crate::primitives::Point2;
use num_traits::Float;
use std::iter::Fuse;
use std::marker::PhantomData;

/// Nth-point simplification parameters.
///
/// An `n` below 2 keeps every point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthPoint {
    n: usize,
}

impl NthPoint {
    /// Creates an Nth-point filter keeping every `n`th point.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Returns the step size.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl<F: Float> Simplifier<F> for NthPoint {
    type Iter<I: Iterator<Item = Point2<F>>> = NthPointIter<F, I>;

    fn simplify_iter<I: Iterator<Item = Point2<F>>>(&self, points: I) -> NthPointIter<F, I> {
        NthPointIter {
            points: points.fuse(),
            n: self.n,
            index: 0,
            pending: None,
            _marker: PhantomData,
        }
    }
}

/// Iterator over the points kept by [`NthPoint`].
#[derive(Debug, Clone)]
pub struct NthPointIter<F, I> {
    points: Fuse<I>,
    n: usize,
    index: usize,
    // Last point seen that was not kept; flushed when the input ends.
    pending: Option<Point2<F>>,
    _marker: PhantomData<F>,
}

impl<F: Float, I: Iterator<Item = Point2<F>>> Iterator for NthPointIter<F, I> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        if self.n < 2 {
            return self.points.next();
        }

        for point in self.points.by_ref() {
            let index = self.index;
            self.index += 1;
            if index % self.n == 0 {
                self.pending = None;
                return Some(point);
            }
            self.pending = Some(point);
        }

        self.pending.take()
    }
}

/// Keeps every `n`th point, calling `on_retain` for each kept point.
///
/// The first and last points are always kept. `n < 2` keeps every point.
///
/// # Example
///
/// ```
/// use polythin::{simplify::nth_point, Point2};
///
/// let points: Vec<Point2<f64>> = (0..10).map(|i| Point2::new(i as f64, 0.0)).collect();
///
/// let mut kept = Vec::new();
/// nth_point(points.iter().copied(), 4, |p| kept.push(p.x));
/// assert_eq!(kept, vec![0.0, 4.0, 8.0, 9.0]);
/// ```
pub fn nth_point<F, P>(points: P, n: usize, on_retain: impl FnMut(Point2<F>))
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    NthPoint::new(n)
        .simplify_iter(points.into_iter())
        .for_each(on_retain);
}

/// Lazy, restartable form of [`nth_point`].
pub fn nth_point_lazy<F, S>(points: S, n: usize) -> Simplified<S, NthPoint>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    NthPoint::new(n).lazy(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: usize) -> Vec<Point2<f64>> {
        (0..count).map(|i| Point2::new(i as f64, 0.0)).collect()
    }

    fn kept_x(points: &[Point2<f64>], n: usize) -> Vec<f64> {
        let mut kept = Vec::new();
        nth_point(points.iter().copied(), n, |p| kept.push(p.x));
        kept
    }

    #[test]
    fn test_nth_point_every_third_of_ten() {
        // Index 9 is a multiple of 3, so no extra last point is appended
        assert_eq!(kept_x(&line(10), 3), vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_nth_point_appends_last() {
        assert_eq!(kept_x(&line(11), 3), vec![0.0, 3.0, 6.0, 9.0, 10.0]);
        assert_eq!(kept_x(&line(5), 10), vec![0.0, 4.0]);
    }

    #[test]
    fn test_nth_point_small_n_is_identity() {
        let points = line(7);
        assert_eq!(kept_x(&points, 0).len(), 7);
        assert_eq!(kept_x(&points, 1).len(), 7);
    }

    #[test]
    fn test_nth_point_two() {
        assert_eq!(kept_x(&line(6), 2), vec![0.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_nth_point_empty_and_single() {
        assert!(kept_x(&[], 3).is_empty());
        assert_eq!(kept_x(&line(1), 3), vec![0.0]);
        assert_eq!(kept_x(&line(2), 3), vec![0.0, 1.0]);
    }

    #[test]
    fn test_nth_point_lazy_matches_push() {
        let points = line(23);
        let lazy = nth_point_lazy(points.iter().copied(), 5);
        let pulled: Vec<f64> = lazy.iter().map(|p| p.x).collect();
        assert_eq!(pulled, kept_x(&points, 5));
        assert_eq!(pulled, lazy.iter().map(|p| p.x).collect::<Vec<_>>());
    }

    #[test]
    fn test_nth_point_keeps_duplicate_last() {
        // The last point is tracked by position, not by value
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let mut kept = Vec::new();
        nth_point(points.iter().copied(), 5, |p| kept.push(p));
        assert_eq!(kept, vec![points[0], points[2]]);
    }

    #[test]
    fn test_nth_point_f32() {
        let points: Vec<Point2<f32>> = (0..4).map(|i| Point2::new(i as f32, 1.0)).collect();
        let kept = NthPoint::new(2).simplify(points.iter().copied());
        assert_eq!(kept.len(), 3);
    }
}
