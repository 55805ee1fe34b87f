//! # Client Errors
//!
//! Failures seen by the client controller. Every variant ends up as the
//! message of an error alert, so `Display` is what the user reads.

use stock_core::ValidationError;
use thiserror::Error;

/// Errors from talking to the inventory API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or an undecodable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// A response body did not match the expected envelope.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with `{ success: false, error }` or a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The form did not pass validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// HTTP status of a server-reported failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) | ClientError::Validation(_) => None,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ClientError::Api {
            status: 404,
            message: "Product not found: ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: ghost");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: ClientError = ValidationError::Required {
            field: "slug".to_string(),
        }
        .into();
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("slug"));
    }
}
