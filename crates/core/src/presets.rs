//! Built-in example equations.

use crate::Coefficients;

/// A labeled example equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub coefficients: Coefficients,
}

/// The example equations offered as one-click starting points.
pub const PRESETS: [Preset; 6] = [
    Preset {
        label: "x² - 9 = 0 (incomplete b)",
        coefficients: Coefficients::new(1.0, 0.0, -9.0),
    },
    Preset {
        label: "2x² - 32x = 0 (incomplete c)",
        coefficients: Coefficients::new(2.0, -32.0, 0.0),
    },
    Preset {
        label: "2x² - 32 = 0 (incomplete b)",
        coefficients: Coefficients::new(2.0, 0.0, -32.0),
    },
    Preset {
        label: "x² + 7x = 0 (incomplete c)",
        coefficients: Coefficients::new(1.0, 7.0, 0.0),
    },
    Preset {
        label: "x² - 5x + 6 = 0 (complete)",
        coefficients: Coefficients::new(1.0, -5.0, 6.0),
    },
    Preset {
        label: "2x² - 4x - 7 = 0 (complete)",
        coefficients: Coefficients::new(2.0, -4.0, -7.0),
    },
];

/// The coefficients shown when nothing else has been chosen.
pub const DEFAULT: Coefficients = Coefficients::new(1.0, -5.0, 6.0);
