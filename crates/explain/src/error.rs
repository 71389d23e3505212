use std::error::Error as StdError;

use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur while requesting an explanation.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// No API key was configured.
    #[error("no API key configured")]
    MissingApiKey,

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The request could not be sent or the response could not be read.
    #[error("request failed")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered with a body that could not be decoded.
    #[error("malformed response")]
    Decode(#[source] serde_json::Error),
}
