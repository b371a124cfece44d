//! Generic API failure.

use serde_json::Value;
use thiserror::Error;

/// A failing response that is neither a rate limit nor a field validation error.
///
/// ## Examples
///
/// ```
/// use late::error::ApiError;
///
/// let err = ApiError {
///     status: 404,
///     message: "Post not found".to_string(),
///     code: "not_found".to_string(),
///     body: None,
/// };
/// assert_eq!(err.to_string(), "HTTP 404: Post not found");
/// assert!(!err.is_server_error());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("HTTP {status}: {message}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code (from the body, else derived from the status).
    pub code: String,
    /// Parsed response body, when it was JSON.
    pub body: Option<Value>,
}

impl ApiError {
    /// `true` for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}
