//! Page submission errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP response. `message` already carries the status line.
    #[error("{message}")]
    Api { status: u16, message: String },
}
