//! One-dimensional bracketing and refinement.
//!
//! # Bracketing
//!
//! - [`sven_value`]: exponential search for an interval around a minimum
//! - [`sven_derivative`]: exponential search for a sign change of the derivative
//! - [`sven_dsc`]: like [`sven_value`], but returns an equally spaced triple
//!   for [`dsc`]
//!
//! # Refinement
//!
//! | Method | Needs | Stops when |
//! |---|---|---|
//! | [`dichotomy`] | `f` | width ≤ ε |
//! | [`bolzano`] | `f'` | \|f'(mid)\| ≤ ε or width ≤ ε |
//! | [`golden_section_one`], [`golden_section_two`] | `f` | width ≤ ε |
//! | [`fibonacci_one`], [`fibonacci_two`] | `f` | after a fixed number of steps |
//! | [`newton`] | `f'`, `f''` | step ≤ ε and \|f'\| ≤ ε |
//! | [`linear_interpolation`] | `f'` | \|f'\| ≤ ε |
//! | [`interpolation_extrapolation`], [`powell`], [`dsc`] | `f` | relative change in x and f below ε |
//!
//! Every method except the Fibonacci pair is capped by
//! [`Config::max_iters`]; hitting the cap yields [`Status::MaxIters`] with the
//! best available estimate rather than an error.

mod bolzano;
mod bracket;
mod config;
mod dichotomy;
mod error;
mod fibonacci;
mod golden_section;
mod newton;
mod parabolic;
mod regula_falsi;
mod solution;
mod sven;


pub use bolzano::bolzano;
pub use bracket::{Bracket, BracketError, Triple};
pub use config::{Config, ConfigError};
pub use dichotomy::dichotomy;
pub use error::Error;
pub use fibonacci::{fibonacci_one, fibonacci_two};
pub use golden_section::{golden_section_one, golden_section_two};
pub use newton::newton;
pub use parabolic::{dsc, interpolation_extrapolation, powell};
pub use regula_falsi::linear_interpolation;
pub use solution::{Solution, Status};
pub use sven::{MAX_EXPANSIONS, sven_derivative, sven_dsc, sven_value};

/// Evaluates `f` at `x`, rejecting non-finite results.
fn evaluate<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}
