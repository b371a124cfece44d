//! Per-call arguments.
//!
//! A [`RequestArgs`] bundles everything one call needs besides the operation
//! itself: values for `{param}` placeholders, query parameters, a JSON body
//! and extra headers.
//!
//! ## Examples
//!
//! ```
//! use late::RequestArgs;
//! use serde_json::json;
//!
//! let args = RequestArgs::new()
//!     .path_param("postId", "abc123")
//!     .query("limit", "10")
//!     .json(json!({ "content": "Hello" }))
//!     .header("Idempotency-Key", "post-1");
//!
//! assert_eq!(args.path_params().get("postId").map(String::as_str), Some("abc123"));
//! assert_eq!(args.query_params(), [("limit".to_string(), "10".to_string())]);
//! ```

use std::collections::BTreeMap;

use late_define::placeholder_name;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::LateError;

/// Arguments for one generated method call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestArgs {
    path: BTreeMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl RequestArgs {
    /// Empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a `{name}` placeholder.
    pub fn path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path.insert(name.into(), value.to_string());
        self
    }

    /// Appends a query parameter. Repeated names are sent repeatedly.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Sets the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` as the JSON body.
    ///
    /// ## Errors
    ///
    /// Returns `LateError::InvalidRequest` if `body` cannot be represented
    /// as JSON.
    pub fn try_body<B: Serialize>(mut self, body: &B) -> Result<Self, LateError> {
        let value = serde_json::to_value(body)
            .map_err(|e| LateError::InvalidRequest(format!("body is not valid JSON: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Adds a per-call header. It overrides a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Path parameter values by placeholder name.
    pub fn path_params(&self) -> &BTreeMap<String, String> {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Per-call headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Builds the request URL for a path template below `base`.
    ///
    /// Literal segments are appended as-is and placeholders are replaced by
    /// their percent-encoded value (so `/` inside a value stays one segment).
    ///
    /// ## Errors
    ///
    /// Returns `LateError::InvalidRequest` when a placeholder has no value.
    ///
    /// ```
    /// use late::RequestArgs;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://getlate.dev/api").unwrap();
    /// let url = RequestArgs::new()
    ///     .path_param("postId", "a b/c")
    ///     .query("expand", "media")
    ///     .url(&base, "/v1/posts/{postId}")
    ///     .unwrap();
    ///
    /// assert_eq!(url.as_str(), "https://getlate.dev/api/v1/posts/a%20b%2Fc?expand=media");
    /// ```
    pub fn url(&self, base: &Url, template: &str) -> Result<Url, LateError> {
        let mut url = base.clone();

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                LateError::InvalidRequest(format!("base URL '{base}' cannot carry a path"))
            })?;
            segments.pop_if_empty();

            for segment in template.split('/').filter(|s| !s.is_empty()) {
                match placeholder_name(segment) {
                    Some(name) => {
                        let value = self.path.get(name).ok_or_else(|| {
                            LateError::InvalidRequest(format!(
                                "missing path parameter '{name}' for '{template}'"
                            ))
                        })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }

    /// Validated per-call headers.
    ///
    /// ## Errors
    ///
    /// Returns `LateError::InvalidRequest` for a name or value that is not a
    /// legal HTTP header.
    pub fn header_map(&self) -> Result<HeaderMap, LateError> {
        let mut map = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| LateError::InvalidRequest(format!("header name '{name}': {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| LateError::InvalidRequest(format!("header '{name}' value: {e}")))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://getlate.dev/api").unwrap()
    }

    #[test]
    fn literal_paths_join_the_base() {
        let url = RequestArgs::new().url(&base(), "/v1/posts").unwrap();
        assert_eq!(url.as_str(), "https://getlate.dev/api/v1/posts");
    }

    #[test]
    fn host_only_base_does_not_double_slash() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let url = RequestArgs::new().url(&base, "/v1/usage-stats").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/usage-stats");
    }

    #[test]
    fn placeholders_are_substituted() {
        let url = RequestArgs::new()
            .path_param("accountId", "acc_1")
            .path_param("reviewId", 42)
            .url(&base(), "/v1/accounts/{accountId}/reviews/{reviewId}/reply")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://getlate.dev/api/v1/accounts/acc_1/reviews/42/reply"
        );
    }

    #[test]
    fn missing_placeholder_is_an_invalid_request() {
        let err = RequestArgs::new()
            .url(&base(), "/v1/posts/{postId}")
            .unwrap_err();
        match err {
            LateError::InvalidRequest(msg) => assert!(msg.contains("postId")),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn query_keeps_order_and_repeats() {
        let url = RequestArgs::new()
            .query("platform", "twitter")
            .query("platform", "bluesky")
            .query("page", 2)
            .url(&base(), "/v1/posts")
            .unwrap();
        assert_eq!(url.query(), Some("platform=twitter&platform=bluesky&page=2"));
    }

    #[test]
    fn try_body_serializes() {
        #[derive(Serialize)]
        struct NewProfile<'a> {
            name: &'a str,
        }

        let args = RequestArgs::new()
            .try_body(&NewProfile { name: "Brand" })
            .unwrap();
        assert_eq!(args.body(), Some(&json!({ "name": "Brand" })));
    }

    #[test]
    fn invalid_header_names_are_rejected() {
        let args = RequestArgs::new().header("bad header", "x");
        assert!(matches!(args.header_map(), Err(LateError::InvalidRequest(_))));
    }

    #[test]
    fn later_headers_win_within_one_call() {
        let map = RequestArgs::new()
            .header("X-Trace", "one")
            .header("x-trace", "two")
            .header_map()
            .unwrap();
        assert_eq!(map.get("x-trace").unwrap(), "two");
        assert_eq!(map.len(), 1);
    }
}
