//! Perpendicular distance simplification.
//!
//! Slides a window of three consecutive points `(p0, p1, p2)` along the
//! polyline, where `p0` is the last kept point. The middle point is dropped
//! when it lies within the tolerance of the segment `p0 -> p2`.
//!
//! A single pass can leave points that a second pass would remove, so a
//! multi-pass driver re-runs the filter on its own output until it stops
//! removing points or the pass budget is spent.

use super::{Simplified, Simplifier};
use crate::distance::segment_distance2;
use crate::error::SimplifyError;
use crate::primitives::Point2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::iter::Fuse;
use std::mem;
use std::vec;
use tracing::debug;

/// Single-pass perpendicular distance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpendicularDistance<F> {
    tol: Tolerance<F>,
}

impl<F: Float> PerpendicularDistance<F> {
    /// Creates a single-pass perpendicular distance filter.
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

impl<F: Float> Simplifier<F> for PerpendicularDistance<F> {
    type Iter<I: Iterator<Item = Point2<F>>> = PerpendicularDistanceIter<F, I>;

    fn simplify_iter<I: Iterator<Item = Point2<F>>>(
        &self,
        points: I,
    ) -> PerpendicularDistanceIter<F, I> {
        PerpendicularDistanceIter {
            points: points.fuse(),
            tol2: self.tol.squared(),
            passthrough: self.tol.is_degenerate(),
            p0: None,
            p1: None,
        }
    }
}

/// Iterator over the points kept by one [`PerpendicularDistance`] pass.
#[derive(Debug, Clone)]
pub struct PerpendicularDistanceIter<F, I> {
    points: Fuse<I>,
    tol2: F,
    passthrough: bool,
    // Last kept point.
    p0: Option<Point2<F>>,
    // Candidate carried over when the window advanced by one.
    p1: Option<Point2<F>>,
}

impl<F: Float, I: Iterator<Item = Point2<F>>> Iterator for PerpendicularDistanceIter<F, I> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        if self.passthrough {
            return self.points.next();
        }

        let Some(p0) = self.p0 else {
            let first = self.points.next()?;
            self.p0 = Some(first);
            return Some(first);
        };

        let p1 = match self.p1.take() {
            Some(p1) => p1,
            None => self.points.next()?,
        };

        match self.points.next() {
            Some(p2) if segment_distance2(p0, p2, p1) < self.tol2 => {
                // p1 is redundant, advance by two
                self.p0 = Some(p2);
                Some(p2)
            }
            Some(p2) => {
                self.p0 = Some(p1);
                self.p1 = Some(p2);
                Some(p1)
            }
            None => {
                // p1 is the last point
                if p1 == p0 {
                    return None;
                }
                self.p0 = Some(p1);
                Some(p1)
            }
        }
    }
}

/// Multi-pass perpendicular distance parameters.
///
/// Runs up to `repeat` passes. Intermediate passes are materialized; the
/// final pass streams. Stops early as soon as a pass removes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpendicularPasses<F> {
    pass: PerpendicularDistance<F>,
    repeat: usize,
}

impl<F: Float> PerpendicularPasses<F> {
    /// Creates a multi-pass filter.
    ///
    /// Returns an error if `tol` is negative or NaN, or if `repeat` is less
    /// than 2.
    pub fn new(tol: F, repeat: usize) -> Result<Self, SimplifyError> {
        let pass = PerpendicularDistance::new(tol)?;
        if repeat <= 1 {
            debug!(repeat, "rejected repeat count");
            return Err(SimplifyError::InvalidRepeat { repeat });
        }
        Ok(Self { pass, repeat })
    }

    /// Returns the maximum number of passes.
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Returns the validated tolerance.
    pub fn tolerance(&self) -> Tolerance<F> {
        self.pass.tolerance()
    }

    fn run_intermediate<I: Iterator<Item = Point2<F>>>(&self, points: I) -> Passes<F, I> {
        let mut current: Vec<Point2<F>> = points.collect();

        for pass in 1..self.repeat {
            let next = self.pass.simplify(current.iter().copied());
            debug!(
                pass,
                before = current.len(),
                after = next.len(),
                "perpendicular distance pass"
            );
            if next.len() == current.len() {
                debug!(pass, "perpendicular distance converged");
                return Passes::Converged(next.into_iter());
            }
            current = next;
        }

        Passes::Final(self.pass.simplify_iter(current.into_iter()))
    }
}

impl<F: Float> Simplifier<F> for PerpendicularPasses<F> {
    type Iter<I: Iterator<Item = Point2<F>>> = PerpendicularPassesIter<F, I>;

    fn simplify_iter<I: Iterator<Item = Point2<F>>>(
        &self,
        points: I,
    ) -> PerpendicularPassesIter<F, I> {
        PerpendicularPassesIter {
            passes: *self,
            state: Passes::Pending(points),
        }
    }
}

#[derive(Debug, Clone)]
enum Passes<F, I> {
    Pending(I),
    Final(PerpendicularDistanceIter<F, vec::IntoIter<Point2<F>>>),
    Converged(vec::IntoIter<Point2<F>>),
    Taken,
}

/// Iterator over the points kept by [`PerpendicularPasses`].
///
/// The intermediate passes run when the first point is requested.
#[derive(Debug, Clone)]
pub struct PerpendicularPassesIter<F, I> {
    passes: PerpendicularPasses<F>,
    state: Passes<F, I>,
}

impl<F: Float, I: Iterator<Item = Point2<F>>> Iterator for PerpendicularPassesIter<F, I> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        if let Passes::Pending(_) = self.state {
            if let Passes::Pending(points) = mem::replace(&mut self.state, Passes::Taken) {
                self.state = self.passes.run_intermediate(points);
            }
        }

        match &mut self.state {
            Passes::Final(iter) => iter.next(),
            Passes::Converged(iter) => iter.next(),
            Passes::Pending(_) | Passes::Taken => None,
        }
    }
}

/// Single-pass perpendicular distance simplification.
///
/// Calls `on_retain` for every kept point, in order.
///
/// # Example
///
/// ```
/// use polythin::{simplify::perpendicular_distance, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1), // Close to the segment (0,0)-(2,0), removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0), // Far from the segment (2,0)-(4,0), kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let mut simplified = Vec::new();
/// perpendicular_distance(points, 0.5, |p| simplified.push(p)).unwrap();
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn perpendicular_distance<F, P>(
    points: P,
    tol: F,
    on_retain: impl FnMut(Point2<F>),
) -> Result<(), SimplifyError>
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    PerpendicularDistance::new(tol)?
        .simplify_iter(points.into_iter())
        .for_each(on_retain);
    Ok(())
}

/// Lazy, restartable form of [`perpendicular_distance`].
pub fn perpendicular_distance_lazy<F, S>(
    points: S,
    tol: F,
) -> Result<Simplified<S, PerpendicularDistance<F>>, SimplifyError>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    Ok(PerpendicularDistance::new(tol)?.lazy(points))
}

/// Multi-pass perpendicular distance simplification.
///
/// Runs at most `repeat` passes, stopping early once a pass removes nothing.
/// `repeat` must be at least 2; use [`perpendicular_distance`] for one pass.
pub fn perpendicular_distance_repeat<F, P>(
    points: P,
    tol: F,
    repeat: usize,
    on_retain: impl FnMut(Point2<F>),
) -> Result<(), SimplifyError>
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    PerpendicularPasses::new(tol, repeat)?
        .simplify_iter(points.into_iter())
        .for_each(on_retain);
    Ok(())
}

/// Lazy, restartable form of [`perpendicular_distance_repeat`].
pub fn perpendicular_distance_repeat_lazy<F, S>(
    points: S,
    tol: F,
    repeat: usize,
) -> Result<Simplified<S, PerpendicularPasses<F>>, SimplifyError>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    Ok(PerpendicularPasses::new(tol, repeat)?.lazy(points))
}
