use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::format::format_equation;

/// The coefficients of `a·x² + b·x + c = 0`.
///
/// No invariant restricts the values. `a` may be zero, in which case the
/// equation degenerates to `b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Creates a new set of coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates `a·x² + b·x + c` at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Returns `true` if `a` is exactly zero.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.a == 0.0
    }
}

impl From<[f64; 3]> for Coefficients {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_equation(self))
    }
}
