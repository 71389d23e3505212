mod text;
mod wrap;

pub use text::TextDocument;
pub use wrap::wrap;

use std::{error::Error as StdError, path::Path};

/// The visual role of a piece of text.
///
/// Adapters map each style onto whatever their format supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// The document title.
    Title,

    /// A section heading.
    Heading,

    /// Regular prose.
    Body,

    /// Fixed-width content such as an equation.
    Monospace,

    /// De-emphasized notes.
    Muted,
}

/// The operations a report needs from an output document.
pub trait Document {
    type Error: StdError + Send + Sync + 'static;

    /// Adds a block of text, wrapped to the page width.
    fn add_text(&mut self, text: &str, style: Style);

    /// Adds a single line without wrapping.
    fn add_line(&mut self, line: &str, style: Style);

    /// Writes the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the document cannot be written.
    fn save(&self, path: &Path) -> Result<(), Self::Error>;
}
