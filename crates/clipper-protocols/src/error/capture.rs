//! Capture errors.

use thiserror::Error;

use super::SubmitError;

/// Errors surfaced for a single save attempt.
///
/// Each variant is reported once to the user as a plain string; none of
/// them are retried.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("No answer text found")]
    EmptyInput,

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("{0}")]
    ConfigurationMissing(String),

    #[error("{0}")]
    RemoteSubmission(String),
}

impl From<SubmitError> for CaptureError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::NotConfigured(message) => CaptureError::ConfigurationMissing(message),
            other => CaptureError::RemoteSubmission(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_error() {
        let err = CaptureError::EmptyInput;
        assert_eq!(err.to_string(), "No answer text found");
    }

    #[test]
    fn test_invalid_message_error() {
        let err = CaptureError::InvalidMessage("unexpected kind".to_string());
        let display = err.to_string();
        assert!(display.contains("Invalid message"));
        assert!(display.contains("unexpected kind"));
    }

    #[test]
    fn test_configuration_missing_is_verbatim() {
        let err = CaptureError::ConfigurationMissing("Set the token".to_string());
        assert_eq!(err.to_string(), "Set the token");
    }

    #[test]
    fn test_from_submit_not_configured() {
        let err = CaptureError::from(SubmitError::NotConfigured("no token".to_string()));
        assert!(matches!(err, CaptureError::ConfigurationMissing(_)));
    }

    #[test]
    fn test_from_submit_api_error() {
        let err = CaptureError::from(SubmitError::Api {
            status: 400,
            message: "400 Bad Request".to_string(),
        });
        assert!(matches!(err, CaptureError::RemoteSubmission(_)));
        assert_eq!(err.to_string(), "400 Bad Request");
    }

    #[test]
    fn test_from_submit_transport_error() {
        let err = CaptureError::from(SubmitError::Transport("connection refused".to_string()));
        assert!(err.to_string().contains("connection refused"));
    }
}
