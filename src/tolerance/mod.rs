//! Epsilon-aware predicates and validated tolerances.
//!
//! All functions in this module take explicit tolerance parameters.
//! The only implicit epsilon is `F::epsilon()` in [`is_near_zero`].

mod predicates;
mod squared;

pub use predicates::{approx_eq, is_near_zero};
pub use squared::Tolerance;
