//! Error types for the assistant webhooks.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fulfilling an assistant request.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request's action has no registered handler
    #[error("No matching intent handler for: {0}")]
    NoMatchingIntent(String),

    /// HTTP method other than POST
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) | Error::NoMatchingIntent(_) => 400,
            Error::MethodNotAllowed(_) => 405,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::Validation("x".into()).status_code(), 400);
        assert_eq!(Error::NoMatchingIntent("inquiry.other".into()).status_code(), 400);
        assert_eq!(Error::MethodNotAllowed("GET".into()).status_code(), 405);
        assert_eq!(Error::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_no_matching_intent_message() {
        let err = Error::NoMatchingIntent("inquiry.other".to_string());
        assert_eq!(err.to_string(), "No matching intent handler for: inquiry.other");
    }
}
