//! Opheim simplification.
//!
//! A bounded variant of Reumann-Witkam. From the current key point `r0`, a
//! ray is cast through the first point lying at least `min_tol` away. Points
//! are dropped while they stay within `min_tol` of that ray and within
//! `max_tol` of `r0`; the point before the first one that violates either
//! bound becomes the next key point.
//!
//! The violating point is not skipped: scanning resumes at it from the new
//! key point, so it may anchor the next ray. When nothing lies between `r0`
//! and the violating point, that point is kept and becomes the key point
//! itself, so no point is ever emitted twice.

use super::{Simplified, Simplifier};
use crate::distance::{point_distance2, ray_distance2};
use crate::error::SimplifyError;
use crate::primitives::Point2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::iter::Fuse;

/// Opheim parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opheim<F> {
    min_tol: Tolerance<F>,
    max_tol: Tolerance<F>,
}

impl<F: Float> Opheim<F> {
    /// Creates an Opheim filter.
    ///
    /// `min_tol` bounds the distance to the ray, `max_tol` the distance to
    /// the ray origin. Returns an error if either is negative or NaN.
    pub fn new(min_tol: F, max_tol: F) -> Result<Self, SimplifyError> {
        Ok(Self {
            min_tol: Tolerance::named("min_tol", min_tol)?,
            max_tol: Tolerance::named("max_tol", max_tol)?,
        })
    }

    /// Returns the validated ray distance tolerance.
    pub fn min_tolerance(&self) -> Tolerance<F> {
        self.min_tol
    }

    /// Returns the validated origin distance tolerance.
    pub fn max_tolerance(&self) -> Tolerance<F> {
        self.max_tol
    }
}

impl<F: Float> Simplifier<F> for Opheim<F> {
    type Iter<I: Iterator<Item = Point2<F>>> = OpheimIter<F, I>;

    fn simplify_iter<I: Iterator<Item = Point2<F>>>(&self, points: I) -> OpheimIter<F, I> {
        OpheimIter {
            points: points.fuse(),
            min_tol2: self.min_tol.squared(),
            max_tol2: self.max_tol.squared(),
            passthrough: self.min_tol.is_degenerate() || self.max_tol.is_degenerate(),
            origin: None,
            direction: None,
            previous: None,
            carried: None,
            tail: None,
        }
    }
}

/// Iterator over the points kept by [`Opheim`].
#[derive(Debug, Clone)]
pub struct OpheimIter<F, I> {
    points: Fuse<I>,
    min_tol2: F,
    max_tol2: F,
    passthrough: bool,
    // r0
    origin: Option<Point2<F>>,
    // r1, `None` while the ray is undefined
    direction: Option<Point2<F>>,
    // pi, `None` while the previous point is the origin itself
    previous: Option<Point2<F>>,
    // Point that ended the last segment, scanned again from the new origin.
    carried: Option<Point2<F>>,
    // Last point read if it has not been kept yet.
    tail: Option<Point2<F>>,
}

impl<F: Float, I: Iterator<Item = Point2<F>>> Iterator for OpheimIter<F, I> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        if self.passthrough {
            return self.points.next();
        }

        let Some(r0) = self.origin else {
            let first = self.points.next()?;
            self.origin = Some(first);
            return Some(first);
        };

        while let Some(pj) = self.carried.take().or_else(|| self.points.next()) {
            self.tail = Some(pj);
            let pi = self.previous.replace(pj);

            let r1 = match self.direction {
                Some(r1) => r1,
                None => {
                    // discard points within the minimum tolerance of r0
                    if point_distance2(r0, pj) < self.min_tol2 {
                        continue;
                    }
                    self.direction = Some(pj);
                    pj
                }
            };

            if point_distance2(r0, pj) < self.max_tol2
                && ray_distance2(r0, r1, pj) < self.min_tol2
            {
                continue;
            }

            self.direction = None;
            return match pi {
                Some(pi) => {
                    self.origin = Some(pi);
                    self.previous = None;
                    self.carried = Some(pj);
                    Some(pi)
                }
                None => {
                    // Nothing between r0 and pj, pj itself becomes the key
                    self.origin = Some(pj);
                    self.previous = None;
                    self.tail = None;
                    Some(pj)
                }
            };
        }

        // Always keep last point
        self.tail.take()
    }
}

/// Opheim simplification.
///
/// Calls `on_retain` for every kept point, in order. The first and last
/// points are always kept. A degenerate `min_tol` or `max_tol` keeps every
/// point.
///
/// # Example
///
/// ```
/// use polythin::{simplify::opheim, Point2};
///
/// let points: Vec<Point2<f64>> = (0..20).map(|i| Point2::new(i as f64, 0.0)).collect();
///
/// let mut kept = Vec::new();
/// opheim(points.iter().copied(), 1.0, 25.0, |p| kept.push(p)).unwrap();
/// assert_eq!(kept, vec![points[0], points[19]]);
/// ```
pub fn opheim<F, P>(
    points: P,
    min_tol: F,
    max_tol: F,
    on_retain: impl FnMut(Point2<F>),
) -> Result<(), SimplifyError>
where
    F: Float,
    P: IntoIterator<Item = Point2<F>>,
{
    Opheim::new(min_tol, max_tol)?
        .simplify_iter(points.into_iter())
        .for_each(on_retain);
    Ok(())
}

/// Lazy, restartable form of [`opheim`].
pub fn opheim_lazy<F, S>(
    points: S,
    min_tol: F,
    max_tol: F,
) -> Result<Simplified<S, Opheim<F>>, SimplifyError>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
{
    Ok(Opheim::new(min_tol, max_tol)?.lazy(points))
}
