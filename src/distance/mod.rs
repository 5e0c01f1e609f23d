//! Squared distance kernels shared by the simplification algorithms.
//!
//! Every kernel projects the query point onto the direction `b - a` and
//! compares squared distances only. A direction whose squared length is
//! within epsilon of zero is never divided by; the kernel degrades to the
//! point distance to `a` instead.

use crate::primitives::Point2;
use crate::tolerance::is_near_zero;
use num_traits::Float;

/// Squared Euclidean distance between two points.
#[inline]
pub fn point_distance2<F: Float>(p: Point2<F>, q: Point2<F>) -> F {
    p.distance_squared(q)
}

/// Projection parameter of `p` onto the direction from `a` to `b`.
///
/// Returns `None` when `a` and `b` coincide within epsilon.
#[inline]
fn projection<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>) -> Option<F> {
    let v = b - a;
    let len_sq = v.magnitude_squared();
    if is_near_zero(len_sq) {
        return None;
    }
    Some((p - a).dot(v) / len_sq)
}

#[inline]
fn distance2_at<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>, t: F) -> F {
    point_distance2(p, a + (b - a) * t)
}

/// Squared distance from `p` to the infinite line through `l1` and `l2`.
///
/// Falls back to `point_distance2(p, l1)` when the line is degenerate.
///
/// # Example
///
/// ```
/// use polythin::{distance::line_distance2, Point2};
///
/// let d2 = line_distance2(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(7.0, 2.0));
/// assert_eq!(d2, 4.0);
/// ```
pub fn line_distance2<F: Float>(l1: Point2<F>, l2: Point2<F>, p: Point2<F>) -> F {
    match projection(l1, l2, p) {
        Some(t) => distance2_at(l1, l2, p, t),
        None => point_distance2(p, l1),
    }
}

/// Squared distance from `p` to the segment from `s1` to `s2`.
///
/// Projections before `s1` measure to `s1`, projections past `s2` measure to
/// `s2`. Falls back to `point_distance2(p, s1)` when the segment is degenerate.
pub fn segment_distance2<F: Float>(s1: Point2<F>, s2: Point2<F>, p: Point2<F>) -> F {
    match projection(s1, s2, p) {
        None => point_distance2(p, s1),
        Some(t) if t <= F::zero() => point_distance2(p, s1),
        Some(t) if t >= F::one() => point_distance2(p, s2),
        Some(t) => distance2_at(s1, s2, p, t),
    }
}

/// Squared distance from `p` to the ray starting at `r1` and passing through `r2`.
///
/// Only the origin side is clamped. Falls back to `point_distance2(p, r1)`
/// when the ray direction is degenerate.
pub fn ray_distance2<F: Float>(r1: Point2<F>, r2: Point2<F>, p: Point2<F>) -> F {
    match projection(r1, r2, p) {
        None => point_distance2(p, r1),
        Some(t) if t <= F::zero() => point_distance2(p, r1),
        Some(t) => distance2_at(r1, r2, p, t),
    }
}
