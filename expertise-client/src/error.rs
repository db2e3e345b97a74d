//! Client error types

use std::collections::BTreeMap;

use thiserror::Error;

/// Error body returned by the API on failure
///
/// ```json
/// { "message": "The given data was invalid.",
///   "errors": { "code": ["The code has already been taken."] } }
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub message: String,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected payload (400 / 422), with per-field messages when provided
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// Any other non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Operation not offered by this resource
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build the error matching a non-success status and its body
    pub(crate) fn from_status(status: http::StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
        let message = parsed
            .as_ref()
            .map(|e| e.message.clone())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    body.to_string()
                }
            });

        match status {
            http::StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            http::StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            http::StatusCode::NOT_FOUND => ClientError::NotFound(message),
            http::StatusCode::BAD_REQUEST | http::StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation {
                    message,
                    errors: parsed.map(|e| e.errors).unwrap_or_default(),
                }
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Human-readable message shown to the operator
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(e) if e.is_timeout() => {
                "Le serveur ne répond pas (délai dépassé)".to_string()
            }
            ClientError::Http(e) if e.is_connect() => "Impossible de joindre le serveur".to_string(),
            ClientError::Http(_) => "Erreur réseau".to_string(),
            ClientError::Unauthorized(_) => "Session expirée, veuillez vous reconnecter".to_string(),
            ClientError::Forbidden(_) => "Action non autorisée".to_string(),
            ClientError::NotFound(_) => "Élément introuvable".to_string(),
            ClientError::Validation { message, errors } => errors
                .values()
                .flatten()
                .next()
                .cloned()
                .unwrap_or_else(|| message.clone()),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::NotSupported(_) => "Action non disponible pour cette ressource".to_string(),
            other => other.to_string(),
        }
    }

    /// Field errors reported by the API, if any
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ClientError::Validation { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
