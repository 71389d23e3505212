//! Sampling of the parabola for plotting.

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::Coefficients;

/// Distance between consecutive sample x values.
pub const STEP: f64 = 0.5;

/// Default half-width of the sampled window around the vertex.
pub const HALF_RANGE: f64 = 10.0;

/// Largest number of points a single call returns.
pub const MAX_POINTS: usize = 100_000;

/// A sampled point on the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct GraphPoint {
    /// The x value, rounded to one decimal.
    pub x: f64,

    /// The curve value at x, rounded to two decimals.
    pub y: f64,
}

impl From<GraphPoint> for [f64; 2] {
    fn from(point: GraphPoint) -> Self {
        [point.x, point.y]
    }
}

/// Samples the curve over [`HALF_RANGE`] on each side of the vertex.
///
/// See [`sample_with`].
#[must_use]
pub fn sample(coeffs: &Coefficients) -> Vec<GraphPoint> {
    sample_with(coeffs, HALF_RANGE)
}

/// Samples the curve over `half_range` on each side of the vertex.
///
/// The window is `[floor(vx - half_range), ceil(vx + half_range)]`, where
/// `vx = -b / 2a` (or `0` for linear equations). Points are spaced [`STEP`]
/// apart starting at the left edge, up to and including the last one that
/// does not pass the right edge. The curve is evaluated at the exact x, then
/// x is rounded to one decimal and y to two.
///
/// Returns an empty sequence if the window is not finite, or if it would
/// hold more than [`MAX_POINTS`] points.
#[must_use]
pub fn sample_with(coeffs: &Coefficients, half_range: f64) -> Vec<GraphPoint> {
    let vertex_x = if coeffs.is_linear() {
        0.0
    } else {
        -coeffs.b / (2.0 * coeffs.a)
    };

    let start = (vertex_x - half_range).floor();
    let end = (vertex_x + half_range).ceil();
    if !start.is_finite() || !end.is_finite() || end < start {
        return Vec::new();
    }

    let count = ((end - start) / STEP).floor() + 1.0;
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_POINTS as f64;
    if count > limit {
        return Vec::new();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as usize;

    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = start + i as f64 * STEP;
            GraphPoint {
                x: round_to(x, 1),
                y: round_to(coeffs.eval(x), 2),
            }
        })
        .collect()
}

/// Rounds half away from zero to the given number of decimals.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
