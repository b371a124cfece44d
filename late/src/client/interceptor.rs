//! Request and response interceptors.
//!
//! Every [`Transport`](super::Transport) owns two ordered chains. Request
//! interceptors see each outgoing `reqwest::Request` just before dispatch;
//! response interceptors see each [`RawResponse`] before it is decoded and
//! may turn it into an error.
//!
//! The client installs, in order:
//!
//! | Chain | Interceptor | Effect |
//! |-------|-------------|--------|
//! | request | [`DefaultHeaders`] | adds configured headers the call did not set |
//! | request | [`BearerAuth`] | sets `Authorization: Bearer <key>` |
//! | response | [`ErrorNormalizer`] | maps failing statuses to [`LateError`] |

use std::fmt;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::transport::RawResponse;
use crate::error::{LateError, classify};

/// Hook run on every outgoing request.
pub trait RequestInterceptor: Send + Sync {
    /// Short name used in logs and `Debug` output.
    fn name(&self) -> &'static str;

    /// Inspects or mutates the request.
    ///
    /// ## Errors
    ///
    /// An error aborts the call before any network I/O.
    fn intercept(&self, request: &mut reqwest::Request) -> Result<(), LateError>;
}

/// Hook run on every received response.
pub trait ResponseInterceptor: Send + Sync {
    /// Short name used in logs and `Debug` output.
    fn name(&self) -> &'static str;

    /// Passes the response on, possibly modified, or fails the call.
    ///
    /// ## Errors
    ///
    /// An error is returned to the caller as the call's result.
    fn intercept(&self, response: RawResponse) -> Result<RawResponse, LateError>;
}

/// Adds configured headers unless the request already carries them.
///
/// Header names compare case-insensitively, so per-call headers always win.
#[derive(Debug, Clone, Default)]
pub struct DefaultHeaders {
    headers: HeaderMap,
}

impl DefaultHeaders {
    /// Wraps a validated header map.
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }
}

impl RequestInterceptor for DefaultHeaders {
    fn name(&self) -> &'static str {
        "default_headers"
    }

    fn intercept(&self, request: &mut reqwest::Request) -> Result<(), LateError> {
        let target = request.headers_mut();
        for (name, value) in &self.headers {
            if !target.contains_key(name) {
                target.insert(name.clone(), value.clone());
            }
        }
        Ok(())
    }
}

/// Sets the bearer credential on every request.
#[derive(Clone)]
pub struct BearerAuth {
    value: HeaderValue,
}

impl BearerAuth {
    /// Builds the `Authorization` value for `api_key`.
    ///
    /// ## Errors
    ///
    /// Returns `LateError::Config` if the key contains characters that are
    /// not allowed in a header.
    pub fn new(api_key: &str) -> Result<Self, LateError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| LateError::Config("API key is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").field("value", &"<redacted>").finish()
    }
}

impl RequestInterceptor for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer_auth"
    }

    fn intercept(&self, request: &mut reqwest::Request) -> Result<(), LateError> {
        request
            .headers_mut()
            .insert(AUTHORIZATION, self.value.clone());
        Ok(())
    }
}

/// Turns every non-2xx response into a classified [`LateError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNormalizer;

impl ResponseInterceptor for ErrorNormalizer {
    fn name(&self) -> &'static str {
        "error_normalizer"
    }

    fn intercept(&self, response: RawResponse) -> Result<RawResponse, LateError> {
        if response.status.is_success() {
            return Ok(response);
        }
        Err(classify(
            response.status.as_u16(),
            &response.headers,
            &response.body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::{Method, StatusCode};

    fn request() -> reqwest::Request {
        reqwest::Request::new(
            Method::GET,
            "https://getlate.dev/api/v1/posts".parse().unwrap(),
        )
    }

    fn response(status: u16, body: &'static str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn default_headers_fill_gaps_only() {
        let mut defaults = HeaderMap::new();
        defaults.insert("x-team", HeaderValue::from_static("growth"));
        defaults.insert("x-source", HeaderValue::from_static("sdk"));

        let mut req = request();
        req.headers_mut()
            .insert("X-Team", HeaderValue::from_static("override"));

        DefaultHeaders::new(defaults).intercept(&mut req).unwrap();

        assert_eq!(req.headers().get("x-team").unwrap(), "override");
        assert_eq!(req.headers().get("x-source").unwrap(), "sdk");
    }

    #[test]
    fn bearer_auth_always_sets_authorization() {
        let mut req = request();
        req.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));

        BearerAuth::new("sk_123").unwrap().intercept(&mut req).unwrap();

        let value = req.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(value, "Bearer sk_123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_auth_rejects_unprintable_keys() {
        assert!(matches!(
            BearerAuth::new("bad\nkey"),
            Err(LateError::Config(_))
        ));
    }

    #[test]
    fn bearer_auth_debug_is_redacted() {
        let auth = BearerAuth::new("sk_123").unwrap();
        assert!(!format!("{auth:?}").contains("sk_123"));
    }

    #[test]
    fn normalizer_passes_success_through() {
        let passed = ErrorNormalizer.intercept(response(201, "{}")).unwrap();
        assert_eq!(passed.status, StatusCode::CREATED);
    }

    #[test]
    fn normalizer_classifies_failures() {
        let err = ErrorNormalizer
            .intercept(response(404, r#"{"error":"Post not found"}"#))
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Post not found");
    }
}
