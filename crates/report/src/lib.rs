//! Formatted reports of solved quadratic equations.
//!
//! A [`Report`] lays out the equation, its classification and roots, and an
//! optional explanation. It writes through the narrow [`Document`] trait, so
//! any output format only needs an adapter:
//!
//! - [`TextDocument`] — paginated plain text with word wrapping
//!
//! ```
//! use quadra_core::{Coefficients, solve};
//! use quadra_report::{Report, TextDocument};
//!
//! let coeffs = Coefficients::new(1.0, -5.0, 6.0);
//! let solution = solve(&coeffs);
//!
//! let mut doc = TextDocument::new(72, 60);
//! Report::new(coeffs, solution).write(&mut doc);
//! assert!(doc.render().contains("x² - 5x + 6 = 0"));
//! ```

mod config;
mod document;
mod error;
mod report;

pub use config::ReportConfig;
pub use document::{Document, Style, TextDocument, wrap};
pub use error::ReportError;
pub use report::{NO_EXPLANATION, Report};
