//! Errors returned by [`crate::RecipeStore`] calls.

use serde::Deserialize;
use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response at all (offline, DNS, CORS, connection reset)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Http {
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },
    /// A 2xx response whose body could not be decoded
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A call that needs a session was made without one
    #[error("no active session")]
    AuthRequired,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Try again later.".to_string(),
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http { status: 401, .. } | ApiError::Http { status: 403, .. } => {
                "You are not allowed to do that.".to_string()
            }
            ApiError::Http { status: 404, .. } => "Not found.".to_string(),
            ApiError::Http { status, .. } => format!("Request failed (HTTP {status})."),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::AuthRequired => "Please log in first.".to_string(),
            ApiError::Validation(err) => err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
