use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The document could not be written.
    #[error("failed to write report to `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
