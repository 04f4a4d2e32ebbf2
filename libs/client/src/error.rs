//! Custom error types for the client library
//!
//! This module defines the failure taxonomy shared by the backend facades
//! and the metadata client: validation, authentication, backend business
//! errors, transport errors, and not-found conditions.

use thiserror::Error;

/// Custom error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client-side field validation failed before submission
    #[error("validation failed for {field}: {message}")]
    Validation {
        /// Form field the error is attributed to
        field: String,
        /// Human-readable message
        message: String,
    },

    /// Missing, expired, or unrefreshable credentials
    #[error("authentication required")]
    Auth,

    /// Backend rejected the request with a business error
    #[error("{message}")]
    Backend {
        /// HTTP status returned by the backend
        status: u16,
        /// Message surfaced from the response body, or a fallback string
        message: String,
    },

    /// Network or transport failure (no usable response)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Absent record
    #[error("resource not found")]
    NotFound,

    /// Payload could not be encoded or decoded
    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Message suitable for a transient user-facing notification
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::Auth => "Your session has expired. Please sign in again.".to_string(),
            ClientError::Backend { message, .. } => message.clone(),
            ClientError::Network(_) => "Could not reach the server. Try again.".to_string(),
            ClientError::NotFound => "Not found.".to_string(),
            ClientError::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }

    /// Form field the backend message most likely refers to.
    ///
    /// The backend reports business errors as free-form strings without a
    /// structured field code, so attribution falls back to keyword matching.
    /// The backend is localized, hence the Portuguese keywords.
    // TODO: replace keyword matching with structured error codes once the
    // backend exposes them.
    pub fn field_hint(&self) -> Option<&'static str> {
        let message = match self {
            ClientError::Backend { message, .. } => message.to_lowercase(),
            _ => return None,
        };

        if message.contains("senha") || message.contains("password") {
            Some("password")
        } else if message.contains("email") || message.contains("e-mail") {
            Some("email")
        } else {
            None
        }
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_hint_matches_localized_keywords() {
        let err = ClientError::Backend {
            status: 400,
            message: "Senha incorreta".to_string(),
        };
        assert_eq!(err.field_hint(), Some("password"));

        let err = ClientError::Backend {
            status: 400,
            message: "E-mail já cadastrado".to_string(),
        };
        assert_eq!(err.field_hint(), Some("email"));
    }

    #[test]
    fn field_hint_is_backend_only() {
        assert_eq!(ClientError::Auth.field_hint(), None);
        let err = ClientError::Backend {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.field_hint(), None);
    }
}
