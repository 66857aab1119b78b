//! Shared Error Types
//!
//! Errors raised below the controllers: the HTTP wrapper and the credential
//! store. Controllers translate these into their own user-facing variants.
//!
//! # Error Categories
//!
//! - `ApiError::Transport` - the request never produced a response
//! - `ApiError::Status` - the backend answered with a non-2xx status
//! - `ApiError::Decode` - the response body had an unexpected shape
//! - `ApiError::Credentials` - the token could not be read from disk
//!
//! # Usage
//!
//! ```rust
//! use cafe_catalog::shared::error::ApiError;
//!
//! let error = ApiError::status(400, serde_json::json!({ "msg": "bad password" }));
//! assert_eq!(error.backend_message(), Some("bad password"));
//! ```
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Failure reading or writing the persisted session token
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("failed to access token file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by the HTTP client wrapper
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        /// Response body, `Value::Null` when it was not JSON
        body: Value,
    },

    /// Response body did not match the expected type
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    #[error("Credential store error: {0}")]
    Credentials(#[from] CredentialStoreError),
}

impl ApiError {
    /// Create a status error
    pub fn status(status: u16, body: Value) -> Self {
        Self::Status { status, body }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `msg` field of an error body, as sent on rejected credentials
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.get("msg").and_then(Value::as_str),
            _ => None,
        }
    }

    /// `errors[0].msg` of an error body, as sent on failed field validation
    pub fn first_validation_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body
                .get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|first| first.get("msg"))
                .and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_message() {
        let error = ApiError::status(400, json!({ "msg": "Usuario / Password no son correctos" }));
        assert_eq!(error.backend_message(), Some("Usuario / Password no son correctos"));
        assert_eq!(error.first_validation_message(), None);
        assert_eq!(error.status_code(), Some(400));
    }

    #[test]
    fn test_first_validation_message() {
        let error = ApiError::status(
            400,
            json!({ "errors": [{ "msg": "El correo ya está registrado", "param": "correo" }] }),
        );
        assert_eq!(error.first_validation_message(), Some("El correo ya está registrado"));
        assert_eq!(error.backend_message(), None);
    }

    #[test]
    fn test_empty_validation_list() {
        let error = ApiError::status(400, json!({ "errors": [] }));
        assert_eq!(error.first_validation_message(), None);
    }

    #[test]
    fn test_non_status_errors_have_no_body() {
        let error = ApiError::decode("truncated");
        assert_eq!(error.status_code(), None);
        assert_eq!(error.backend_message(), None);
        assert!(!error.is_transport());
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::status(401, Value::Null);
        let display = format!("{}", error);
        assert!(display.contains("401"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<Value, _> = serde_json::from_str("{ invalid json }");
        let api_error: ApiError = result.unwrap_err().into();
        match api_error {
            ApiError::Decode { .. } => {}
            _ => panic!("Expected Decode from serde error"),
        }
    }
}
