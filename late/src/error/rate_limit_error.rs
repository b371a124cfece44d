//! Rate-limit failures.

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// Seconds assumed when the server gives no reset hint.
pub const DEFAULT_RESET_SECONDS: u64 = 60;

/// When the rate limit lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetHint {
    /// Relative delay in seconds (`retryAfter`, `Retry-After`).
    After(u64),
    /// Absolute instant (`resetAt`, `X-RateLimit-Reset`).
    At(DateTime<Utc>),
}

/// A 429 response.
///
/// ## Examples
///
/// ```
/// use late::error::{RateLimitError, ResetHint};
///
/// let err = RateLimitError {
///     status: 429,
///     message: "Too many requests".to_string(),
///     code: "rate_limited".to_string(),
///     limit: Some(100),
///     remaining: Some(0),
///     reset: Some(ResetHint::After(30)),
///     body: None,
/// };
/// assert_eq!(err.seconds_until_reset(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Rate limit exceeded: {message}")]
pub struct RateLimitError {
    /// HTTP status code (429).
    pub status: u16,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code, `rate_limited` unless the body says otherwise.
    pub code: String,
    /// Request quota for the window (`X-RateLimit-Limit`).
    pub limit: Option<u64>,
    /// Requests left in the window (`X-RateLimit-Remaining`).
    pub remaining: Option<u64>,
    /// Reset hint, if the server sent one.
    pub reset: Option<ResetHint>,
    /// Parsed response body, when it was JSON.
    pub body: Option<Value>,
}

impl RateLimitError {
    /// Seconds until the limit lifts, as of now.
    pub fn seconds_until_reset(&self) -> u64 {
        self.seconds_until_reset_at(Utc::now())
    }

    /// Seconds until the limit lifts, as of `now`.
    ///
    /// Relative hints are returned as-is; absolute hints are rounded up and
    /// never negative. Without a hint the answer is [`DEFAULT_RESET_SECONDS`].
    pub fn seconds_until_reset_at(&self, now: DateTime<Utc>) -> u64 {
        match self.reset {
            Some(ResetHint::After(seconds)) => seconds,
            Some(ResetHint::At(reset)) => {
                let millis = (reset - now).num_milliseconds();
                if millis <= 0 {
                    0
                } else {
                    (millis as u64).div_ceil(1000)
                }
            }
            None => DEFAULT_RESET_SECONDS,
        }
    }

    /// The absolute reset instant, if the server sent one.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        match self.reset {
            Some(ResetHint::At(at)) => Some(at),
            _ => None,
        }
    }
}
