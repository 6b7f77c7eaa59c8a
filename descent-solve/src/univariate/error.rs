use super::BracketError;

/// Errors that can occur during bracketing or refinement.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    Bracket(#[from] BracketError),

    #[error("no bracket found from {initial} after {expansions} expansions")]
    NoBracketFound { initial: f64, expansions: usize },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("derivative has the same sign at both bounds [{left}, {right}]")]
    NoSignChange { left: f64, right: f64 },

    #[error("zero second derivative at x = {x}")]
    ZeroCurvature { x: f64 },

    #[error("{method} produced a non-finite estimate")]
    NonFiniteEstimate { method: &'static str },
}
