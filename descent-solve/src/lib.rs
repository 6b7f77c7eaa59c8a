//! Line searches and descent drivers for unconstrained minimization.
//!
//! # Modules
//!
//! - [`differential`]: finite-difference gradient, antigradient and Hessian
//! - [`ray`]: maps a step length onto a point along a direction
//! - [`univariate`]: Sven bracketing and one-dimensional refinement methods
//! - [`multivariate`]: descent drivers built from a direction rule and a
//!   line search
//!
//! Objectives are plain callables: `Fn(f64) -> f64` for one-dimensional
//! searches and `Fn(&[f64]) -> f64` for the drivers. Derivatives are always
//! estimated numerically unless a routine asks for a derivative callable.

pub mod differential;
pub mod multivariate;
pub mod ray;
pub mod univariate;

/// Default iteration cap shared by the refinement methods and the drivers.
pub const MAX_ITERATIONS: usize = 30;
