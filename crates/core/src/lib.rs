//! Core types and functions for Quadra.
//!
//! This crate holds the pure computational core that the explainer, report,
//! and viewer crates build on:
//!
//! - [`Coefficients`] — the `(a, b, c)` of `a·x² + b·x + c = 0`
//! - [`solve`] — classifies the equation and finds its real roots and vertex
//! - [`sample`] — evaluates the parabola on a fixed grid around the vertex
//! - [`format_equation`] — renders coefficients as a readable equation
//! - [`presets`] — the built-in example equations
//!
//! Every function here is pure and total. Edge cases are expressed through
//! the returned values, never through errors.

mod coefficients;
mod format;
mod sample;
mod solve;

pub mod presets;

pub use coefficients::Coefficients;
pub use format::{fixed, format_equation};
pub use sample::{GraphPoint, HALF_RANGE, MAX_POINTS, STEP, sample, sample_with};
pub use solve::{EquationKind, Point, Roots, Solution, solve};
