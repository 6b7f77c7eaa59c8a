//! Core types for the descent optimization toolkit.
//!
//! This crate defines the shared building blocks that the solvers build on:
//!
//! - [`Matrix`]: a small, named, dense matrix with determinant, cofactor,
//!   adjoint, transpose and inverse
//! - [`vector`]: norm, dot product and normalization helpers over `&[f64]`
//! - [`Observer`]: receives solver events and optionally returns control actions

mod matrix;
mod observer;

pub mod vector;

pub use matrix::{Matrix, MatrixError};
pub use observer::Observer;
