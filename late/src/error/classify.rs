//! Mapping failing HTTP responses onto the error taxonomy.
//!
//! | Status | Body | Result |
//! |--------|------|--------|
//! | 429 | anything | [`RateLimitError`] |
//! | 400, 422 | `fields` / `errors` / `details` object of string messages | [`ValidationError`] |
//! | anything else | anything | [`ApiError`] |
//!
//! Classification never fails: bodies that are not JSON fall back to
//! status-derived messages and codes.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::{Map, Value};

use super::api_error::ApiError;
use super::rate_limit_error::{RateLimitError, ResetHint};
use super::validation_error::{ValidationError, is_field_map};
use super::LateError;

/// Header carrying the request quota.
pub const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
/// Header carrying the remaining requests.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
/// Header carrying the reset instant (unix seconds).
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

const FIELD_MAP_KEYS: &[&str] = &["fields", "errors", "details"];

/// Classifies a failing response.
///
/// ## Examples
///
/// ```
/// use late::error::{LateError, classify};
/// use reqwest::header::HeaderMap;
///
/// let err = classify(404, &HeaderMap::new(), br#"{"error":"Post not found"}"#);
/// match err {
///     LateError::Api(api) => {
///         assert_eq!(api.message, "Post not found");
///         assert_eq!(api.code, "not_found");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn classify(status: u16, headers: &HeaderMap, body: &[u8]) -> LateError {
    let json = serde_json::from_slice::<Value>(body).ok();

    if status == 429 {
        return LateError::RateLimit(rate_limit_error(status, headers, json));
    }

    if matches!(status, 400 | 422)
        && let Some(json) = &json
        && let Some(fields) = field_map(json)
    {
        return LateError::Validation(ValidationError {
            status,
            message: message_from(Some(json), status),
            code: code_from(Some(json)).unwrap_or_else(|| "validation_error".to_string()),
            fields,
            body: json.clone(),
        });
    }

    LateError::Api(ApiError {
        status,
        message: message_from(json.as_ref(), status),
        code: code_from(json.as_ref()).unwrap_or_else(|| status_code_name(status)),
        body: json,
    })
}

fn rate_limit_error(status: u16, headers: &HeaderMap, json: Option<Value>) -> RateLimitError {
    let reset = json
        .as_ref()
        .and_then(reset_from_body)
        .or_else(|| retry_after_header(headers))
        .or_else(|| {
            header_u64(headers, RATE_LIMIT_RESET)
                .and_then(|secs| unix_seconds(secs as f64))
                .map(ResetHint::At)
        });

    RateLimitError {
        status,
        message: message_from(json.as_ref(), status),
        code: code_from(json.as_ref()).unwrap_or_else(|| "rate_limited".to_string()),
        limit: header_u64(headers, RATE_LIMIT_LIMIT),
        remaining: header_u64(headers, RATE_LIMIT_REMAINING),
        reset,
        body: json,
    }
}

/// `retryAfter` / `retry_after` (seconds), then `resetAt` / `reset`.
fn reset_from_body(body: &Value) -> Option<ResetHint> {
    let relative = ["retryAfter", "retry_after"]
        .iter()
        .find_map(|key| body.get(key).and_then(non_negative_seconds))
        .map(ResetHint::After);

    relative.or_else(|| {
        ["resetAt", "reset"]
            .iter()
            .find_map(|key| body.get(key).and_then(instant))
            .map(ResetHint::At)
    })
}

fn non_negative_seconds(value: &Value) -> Option<u64> {
    let seconds = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (seconds.is_finite() && seconds >= 0.0).then(|| seconds.ceil() as u64)
}

/// RFC 3339 string or unix seconds.
fn instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => unix_seconds(n.as_f64()?),
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|at| at.with_timezone(&Utc))
                .ok()
                .or_else(|| unix_seconds(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn unix_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

/// `Retry-After` as delay-seconds, or as an HTTP date.
fn retry_after_header(headers: &HeaderMap) -> Option<ResetHint> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();

    if let Ok(seconds) = value.parse::<i64>() {
        return u64::try_from(seconds).ok().map(ResetHint::After);
    }

    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|at| ResetHint::At(at.with_timezone(&Utc)))
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

/// The first `fields` / `errors` / `details` object made of string messages.
fn field_map(body: &Value) -> Option<Map<String, Value>> {
    FIELD_MAP_KEYS
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_object))
        .find(|map| is_field_map(map))
        .cloned()
}

/// `message`, else `error` (string), else `error.message`, else a status line.
fn message_from(body: Option<&Value>, status: u16) -> String {
    body.and_then(|body| {
        non_empty_str(body.get("message"))
            .or_else(|| non_empty_str(body.get("error")))
            .or_else(|| non_empty_str(body.get("error").and_then(|e| e.get("message"))))
    })
    .map(str::to_string)
    .unwrap_or_else(|| format!("Request failed with status code {status}"))
}

/// `code`, else `error.code`.
fn code_from(body: Option<&Value>) -> Option<String> {
    let body = body?;
    non_empty_str(body.get("code"))
        .or_else(|| non_empty_str(body.get("error").and_then(|e| e.get("code"))))
        .map(str::to_string)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Fallback code for a status without a body code.
pub fn status_code_name(status: u16) -> String {
    match status {
        400 => "bad_request".to_string(),
        401 => "unauthorized".to_string(),
        403 => "forbidden".to_string(),
        404 => "not_found".to_string(),
        409 => "conflict".to_string(),
        422 => "unprocessable_entity".to_string(),
        429 => "rate_limited".to_string(),
        500..=599 => "server_error".to_string(),
        other => format!("http_{other}"),
    }
}
