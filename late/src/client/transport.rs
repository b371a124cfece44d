//! HTTP transport with interceptor chains.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use super::interceptor::{RequestInterceptor, ResponseInterceptor};
use crate::error::LateError;

/// A fully read response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Decodes the body into `T`. An empty body decodes as JSON `null`.
    ///
    /// ## Errors
    ///
    /// Returns `LateError::Decode` if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, LateError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// One client's HTTP pipeline: a `reqwest::Client` plus interceptor chains.
///
/// Each [`Late`](crate::Late) instance builds its own transport, so two
/// clients never share interceptors.
#[derive(Clone)]
pub struct Transport {
    http: reqwest::Client,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl Transport {
    /// A transport without interceptors.
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Appends a request interceptor.
    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Appends a response interceptor.
    pub fn with_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Request interceptor names in execution order.
    pub fn request_interceptors(&self) -> Vec<&'static str> {
        self.request_interceptors.iter().map(|i| i.name()).collect()
    }

    /// Response interceptor names in execution order.
    pub fn response_interceptors(&self) -> Vec<&'static str> {
        self.response_interceptors.iter().map(|i| i.name()).collect()
    }

    /// Runs the request chain, sends the request, reads the whole body and
    /// runs the response chain.
    ///
    /// ## Errors
    ///
    /// Any interceptor error, or `LateError::Transport` when the request
    /// cannot be sent or its body cannot be read.
    pub async fn send(&self, mut request: reqwest::Request) -> Result<RawResponse, LateError> {
        for interceptor in &self.request_interceptors {
            interceptor.intercept(&mut request)?;
            trace!(interceptor = interceptor.name(), "Applied request interceptor");
        }

        let response = self.http.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let mut raw = RawResponse {
            status,
            headers,
            body,
        };
        for interceptor in &self.response_interceptors {
            raw = interceptor.intercept(raw)?;
            trace!(interceptor = interceptor.name(), "Applied response interceptor");
        }

        Ok(raw)
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("request_interceptors", &self.request_interceptors())
            .field("response_interceptors", &self.response_interceptors())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn raw(body: &'static str) -> RawResponse {
        RawResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Post {
        id: String,
    }

    #[test]
    fn decode_typed_body() {
        let post: Post = raw(r#"{"id":"p1"}"#).decode().unwrap();
        assert_eq!(post, Post { id: "p1".to_string() });
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let value: Value = raw("").decode().unwrap();
        assert_eq!(value, Value::Null);

        let unit: Option<Post> = raw("  ").decode().unwrap();
        assert_eq!(unit, None);
    }

    #[test]
    fn mismatched_body_is_a_decode_error() {
        let err = raw(r#"{"name":"x"}"#).decode::<Post>().unwrap_err();
        assert!(matches!(err, LateError::Decode(_)));
    }

    #[test]
    fn debug_lists_interceptors() {
        let transport = Transport::new(reqwest::Client::new())
            .with_response_interceptor(super::super::interceptor::ErrorNormalizer);
        assert_eq!(transport.response_interceptors(), ["error_normalizer"]);
        assert!(format!("{transport:?}").contains("error_normalizer"));
    }
}
