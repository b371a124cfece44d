//! Error types for the Late client.
//!
//! ## Error Hierarchy
//!
//! ```text
//! LateError
//! ├── MissingCredential  (construction: no API key)
//! ├── RateLimit          (429, with quota and reset hint)
//! ├── Validation         (400/422 with per-field messages)
//! ├── Api                (any other failing status)
//! ├── Transport          (network, TLS, timeout)
//! ├── Decode             (success body does not match the requested type)
//! ├── InvalidRequest     (missing path parameter, bad per-call header)
//! └── Config             (invalid base URL or default header)
//! ```
//!
//! Failing responses are mapped by [`classify`], which is a pure function of
//! status, headers and body.

mod api_error;
mod classify;
mod rate_limit_error;
mod validation_error;

pub use api_error::ApiError;
pub use classify::{
    RATE_LIMIT_LIMIT, RATE_LIMIT_REMAINING, RATE_LIMIT_RESET, classify, status_code_name,
};
pub use rate_limit_error::{DEFAULT_RESET_SECONDS, RateLimitError, ResetHint};
pub use validation_error::ValidationError;

use thiserror::Error;

/// Top-level error type for every client operation.
///
/// ## Examples
///
/// ```rust,ignore
/// use late::prelude::*;
///
/// match client.posts().create_post::<serde_json::Value>(args).await {
///     Ok(post) => println!("{post}"),
///     Err(LateError::RateLimit(e)) => eprintln!("retry in {}s", e.seconds_until_reset()),
///     Err(LateError::Validation(e)) => {
///         for field in e.field_names() {
///             eprintln!("{field}: {:?}", e.messages_for(field));
///         }
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum LateError {
    /// No API key in the options or the environment.
    #[error("Missing API key: pass one in ClientOptions or set {env_var}")]
    MissingCredential {
        /// The environment variable that was consulted.
        env_var: &'static str,
    },

    /// The server rejected the call with 429.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// The server rejected one or more request fields.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other failing response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success body could not be decoded into the requested type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The call could not be built from its arguments.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The client options are unusable.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl LateError {
    /// HTTP status associated with the error, if any.
    ///
    /// A missing credential reports 401.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MissingCredential { .. } => Some(401),
            Self::RateLimit(e) => Some(e.status),
            Self::Validation(e) => Some(e.status),
            Self::Api(e) => Some(e.status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::InvalidRequest(_) | Self::Config(_) => None,
        }
    }

    /// Machine-readable error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::MissingCredential { .. } => Some("missing_api_key"),
            Self::RateLimit(e) => Some(&e.code),
            Self::Validation(e) => Some(&e.code),
            Self::Api(e) => Some(&e.code),
            _ => None,
        }
    }

    /// Returns `true` if repeating the call later may succeed.
    ///
    /// Rate limits, 5xx responses, timeouts and connection failures are
    /// retryable. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit(_) => true,
            Self::Api(e) => e.is_server_error(),
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_reports_401() {
        let err = LateError::MissingCredential {
            env_var: "LATE_API_KEY",
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.code(), Some("missing_api_key"));
        assert!(err.to_string().contains("LATE_API_KEY"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn classified_errors_expose_status_and_code() {
        let err = classify(404, &reqwest::header::HeaderMap::new(), b"");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("not_found"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn rate_limits_and_server_errors_are_retryable() {
        let headers = reqwest::header::HeaderMap::new();
        assert!(classify(429, &headers, b"").is_retryable());
        assert!(classify(503, &headers, b"").is_retryable());
    }

    #[test]
    fn local_errors_have_no_status() {
        let err = LateError::InvalidRequest("missing path parameter 'postId'".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.code(), None);
    }

    #[test]
    fn decode_errors_convert() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: LateError = json_err.into();
        assert!(matches!(err, LateError::Decode(_)));
    }
}
