//! polythin - Streaming polyline simplification
//!
//! Thins dense polylines (sampled splines, GPS tracks, scanned outlines) by
//! removing points, never moving them. Five local, greedy algorithms are
//! provided, each as a single forward pass with constant extra state:
//!
//! - [`simplify::nth_point`]: keep every nth point
//! - [`simplify::radial_distance`]: drop points close to the last kept point
//! - [`simplify::perpendicular_distance`]: drop points close to their neighbours' segment
//! - [`simplify::reumann_witkam`]: drop points inside a strip around a key line
//! - [`simplify::opheim`]: like Reumann-Witkam, with a bounded ray
//!
//! Each comes in an eager form that calls back per kept point and a lazy,
//! restartable form that yields kept points on demand.
//!
//! # Example
//!
//! ```
//! use polythin::{simplify, Point2};
//!
//! let gps: Vec<Point2<f64>> = (0..100)
//!     .map(|i| Point2::new(i as f64 * 0.1, ((i * 7) % 5) as f64 * 0.01))
//!     .collect();
//!
//! let lazy = simplify::reumann_witkam_lazy(gps.iter().copied(), 0.05).unwrap();
//! let thinned: Vec<_> = lazy.iter().collect();
//!
//! assert!(thinned.len() < gps.len());
//! assert_eq!(thinned.first(), gps.first());
//! assert_eq!(thinned.last(), gps.last());
//! ```

pub mod distance;
pub mod error;
pub mod primitives;
pub mod simplify;
pub mod tolerance;

pub use error::SimplifyError;
pub use primitives::{Point2, Vec2};
pub use simplify::{Simplified, Simplifier};
pub use tolerance::{approx_eq, Tolerance};
