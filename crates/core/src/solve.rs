//! Classification and solving of quadratic equations.
//!
//! See [`solve`] for the algorithm.

use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Coefficients, format::fixed};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The structural category of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EquationKind {
    /// `a ≠ 0`, `b ≠ 0`, `c ≠ 0`.
    Complete,

    /// `a ≠ 0`, `b = 0`.
    ///
    /// Also covers `b = c = 0`, since the missing `b` is checked first.
    IncompleteB,

    /// `a ≠ 0`, `b ≠ 0`, `c = 0`.
    IncompleteC,

    /// `a = 0`, reducing the equation to `b·x + c = 0`.
    Linear,
}

impl EquationKind {
    /// Returns the canonical tag, e.g. `"incomplete-b"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::IncompleteB => "incomplete-b",
            Self::IncompleteC => "incomplete-c",
            Self::Linear => "linear",
        }
    }

    /// Returns a human-readable label for badges and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete equation",
            Self::IncompleteB => "Incomplete (missing b)",
            Self::IncompleteC => "Incomplete (missing c)",
            Self::Linear => "Linear equation (a = 0)",
        }
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The real roots of an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum Roots {
    /// Two distinct real roots.
    ///
    /// `x1` comes from the `+√Δ` branch and `x2` from the `−√Δ` branch,
    /// regardless of which is larger.
    Two { x1: f64, x2: f64 },

    /// One repeated real root.
    Double { x: f64 },

    /// No real roots (negative discriminant).
    None,

    /// The single root of the degenerate linear equation `b·x + c = 0`.
    ///
    /// Non-finite when `b = 0`.
    Linear { x: f64 },
}

impl Roots {
    /// Returns the first root slot.
    #[must_use]
    pub fn x1(&self) -> Option<f64> {
        match *self {
            Self::Two { x1, .. } => Some(x1),
            Self::Double { x } | Self::Linear { x } => Some(x),
            Self::None => None,
        }
    }

    /// Returns the second root slot.
    ///
    /// A double root fills both slots; a linear root fills only the first.
    #[must_use]
    pub fn x2(&self) -> Option<f64> {
        match *self {
            Self::Two { x2, .. } => Some(x2),
            Self::Double { x } => Some(x),
            Self::None | Self::Linear { .. } => None,
        }
    }

    /// Returns the distinct roots, in slot order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Self::Two { x1, x2 } => vec![x1, x2],
            Self::Double { x } | Self::Linear { x } => vec![x],
            Self::None => Vec::new(),
        }
    }

    /// Summarizes the roots with two decimals, e.g. `x1 = 3.00, x2 = -3.00`.
    #[must_use]
    pub fn summary(&self) -> String {
        match *self {
            Self::Two { x1, x2 } => format!("x1 = {}, x2 = {}", fixed(x1, 2), fixed(x2, 2)),
            Self::Double { x } => format!("x = {} (double)", fixed(x, 2)),
            Self::Linear { x } => format!("x = {}", fixed(x, 2)),
            Self::None => "No real solutions".to_owned(),
        }
    }
}

/// The result of [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Solution {
    /// The structural category of the equation.
    pub kind: EquationKind,

    /// `b² − 4ac`, or `0` for linear equations.
    pub discriminant: f64,

    /// The real roots, if any.
    pub roots: Roots,

    /// The parabola's turning point, or `(0, c)` for linear equations.
    pub vertex: Point,
}

impl Solution {
    /// Returns `true` for a linear equation whose root is not finite.
    ///
    /// This happens when `a = b = 0`: the equation has either no solution
    /// (`c ≠ 0`) or infinitely many (`c = 0`), and the root holds the
    /// non-finite result of `-c / 0`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self.roots, Roots::Linear { x } if !x.is_finite())
    }
}

/// Classifies an equation and computes its real roots and vertex.
///
/// 1. If `a = 0` the equation is linear: the root is `-c / b`, the vertex is
///    `(0, c)`, and the discriminant is `0`. Nothing guards `b = 0`; the
///    root is then non-finite and [`Solution::is_degenerate`] is `true`.
/// 2. Otherwise the discriminant is `b² − 4ac` and the vertex is `(−b/2a, f(−b/2a))`.
/// 3. A positive discriminant gives two roots, zero gives a double root
///    `−b/2a`, negative gives none.
/// 4. The kind is [`EquationKind::IncompleteB`] if `b = 0`, else
///    [`EquationKind::IncompleteC`] if `c = 0`, else [`EquationKind::Complete`].
///
/// All comparisons against zero are exact. Coefficients that are only nearly
/// zero are classified as nonzero.
#[must_use]
pub fn solve(coeffs: &Coefficients) -> Solution {
    let Coefficients { a, b, c } = *coeffs;

    if a == 0.0 {
        return Solution {
            kind: EquationKind::Linear,
            discriminant: 0.0,
            roots: Roots::Linear { x: -c / b },
            vertex: Point::new(0.0, c),
        };
    }

    let discriminant = b * b - 4.0 * a * c;
    let vertex_x = -b / (2.0 * a);
    let vertex = Point::new(vertex_x, coeffs.eval(vertex_x));

    let roots = if discriminant > 0.0 {
        let sqrt_delta = discriminant.sqrt();
        Roots::Two {
            x1: (-b + sqrt_delta) / (2.0 * a),
            x2: (-b - sqrt_delta) / (2.0 * a),
        }
    } else if discriminant == 0.0 {
        Roots::Double { x: -b / (2.0 * a) }
    } else {
        Roots::None
    };

    let kind = if b == 0.0 {
        EquationKind::IncompleteB
    } else if c == 0.0 {
        EquationKind::IncompleteC
    } else {
        EquationKind::Complete
    };

    Solution {
        kind,
        discriminant,
        roots,
        vertex,
    }
}
