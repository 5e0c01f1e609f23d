//! Streaming polyline simplification algorithms.
//!
//! Every algorithm is a small state machine implemented as an [`Iterator`]
//! over the retained points. Each is exposed in two forms:
//!
//! - a push form (`radial_distance`, `opheim`, ...) that drives the whole
//!   input through the state machine and hands each retained point to a
//!   callback, and
//! - a pull form (`radial_distance_lazy`, `opheim_lazy`, ...) that returns a
//!   [`Simplified`] value. Iterating it runs the scan lazily, one retained
//!   point at a time; iterating it again restarts the scan from the
//!   beginning of the source.
//!
//! Both forms go through the same iterator, so they always agree.
//!
//! # Example
//!
//! ```
//! use polythin::{simplify, Point2};
//!
//! let track: Vec<Point2<f64>> = (0..10).map(|i| Point2::new(i as f64, 0.0)).collect();
//!
//! let mut pushed = Vec::new();
//! simplify::radial_distance(track.iter().copied(), 3.5, |p| pushed.push(p)).unwrap();
//!
//! let lazy = simplify::radial_distance_lazy(track.iter().copied(), 3.5).unwrap();
//! let pulled: Vec<_> = lazy.iter().collect();
//!
//! assert_eq!(pushed, pulled);
//! assert_eq!(pulled.len(), 4); // x = 0, 4, 8 and the last point
//! ```

mod nth_point;
mod opheim;
mod perpendicular;
mod positional;
mod radial;
mod reumann_witkam;

pub use nth_point::{nth_point, nth_point_lazy, NthPoint, NthPointIter};
pub use opheim::{opheim, opheim_lazy, Opheim, OpheimIter};
pub use perpendicular::{
    perpendicular_distance, perpendicular_distance_lazy, perpendicular_distance_repeat,
    perpendicular_distance_repeat_lazy, PerpendicularDistance, PerpendicularDistanceIter,
    PerpendicularPasses, PerpendicularPassesIter,
};
pub use positional::{positional_error_statistics, positional_errors2, ErrorStatistics};
pub use radial::{radial_distance, radial_distance_lazy, RadialDistance, RadialDistanceIter};
pub use reumann_witkam::{
    reumann_witkam, reumann_witkam_closed, reumann_witkam_closed_lazy, reumann_witkam_lazy,
    ReumannWitkam, ReumannWitkamIter,
};

use crate::primitives::Point2;
use num_traits::Float;

/// A configured simplification algorithm.
///
/// Implementors hold only validated parameters; all per-run state lives in
/// the iterator returned by [`Simplifier::simplify_iter`].
pub trait Simplifier<F: Float> {
    /// The lazy iterator over retained points.
    type Iter<I: Iterator<Item = Point2<F>>>: Iterator<Item = Point2<F>>;

    /// Starts a simplification run over `points`.
    ///
    /// No point is read until the returned iterator is advanced.
    fn simplify_iter<I: Iterator<Item = Point2<F>>>(&self, points: I) -> Self::Iter<I>;

    /// Runs the simplification to completion and collects the retained points.
    fn simplify<P: IntoIterator<Item = Point2<F>>>(&self, points: P) -> Vec<Point2<F>> {
        self.simplify_iter(points.into_iter()).collect()
    }

    /// Wraps a re-readable point source into a restartable lazy simplification.
    fn lazy<S>(self, source: S) -> Simplified<S, Self>
    where
        Self: Sized,
        S: IntoIterator<Item = Point2<F>> + Clone,
    {
        Simplified {
            source,
            simplifier: self,
        }
    }
}

/// A lazy, restartable simplification of a point source.
///
/// Nothing is computed until the value is iterated. Every call to
/// [`Simplified::iter`] (or every `for p in &simplified` loop) clones the
/// source and runs a fresh scan from its first point.
#[derive(Debug, Clone)]
pub struct Simplified<S, A> {
    source: S,
    simplifier: A,
}

impl<S, A> Simplified<S, A> {
    /// Returns the configured algorithm.
    pub fn simplifier(&self) -> &A {
        &self.simplifier
    }

    /// Returns the underlying point source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Starts a fresh scan over the source.
    pub fn iter<F>(&self) -> A::Iter<S::IntoIter>
    where
        F: Float,
        S: IntoIterator<Item = Point2<F>> + Clone,
        A: Simplifier<F>,
    {
        self.simplifier.simplify_iter(self.source.clone().into_iter())
    }
}

impl<'a, F, S, A> IntoIterator for &'a Simplified<S, A>
where
    F: Float,
    S: IntoIterator<Item = Point2<F>> + Clone,
    A: Simplifier<F>,
{
    type Item = Point2<F>;
    type IntoIter = A::Iter<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
