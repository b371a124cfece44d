//! The Late client.
//!
//! [`Late`] owns the resolved configuration and one [`Transport`]. The
//! generated namespace accessors (`client.posts()`, `client.connect().telegram()`,
//! ...) borrow it and forward every call to [`Late::execute`].

mod interceptor;
mod options;
mod transport;

pub use interceptor::{
    BearerAuth, DefaultHeaders, ErrorNormalizer, RequestInterceptor, ResponseInterceptor,
};
pub use options::{API_KEY_ENV, ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
pub use transport::{RawResponse, Transport};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use late_define::{HttpVerb, Operation};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::args::RequestArgs;
use crate::error::LateError;
use options::ResolvedOptions;

/// Client for the Late API.
///
/// Cloning is cheap and clones share one connection pool. Separately
/// constructed clients share nothing.
///
/// ## Examples
///
/// ```
/// use late::{ClientOptions, Late};
///
/// let client = Late::new(ClientOptions::new().api_key("sk_test")).unwrap();
/// assert_eq!(client.base_url(), "https://getlate.dev/api");
/// assert!(!client.operations().is_empty());
/// ```
#[derive(Clone)]
pub struct Late {
    inner: Arc<Inner>,
}

struct Inner {
    options: ResolvedOptions,
    transport: Transport,
}

impl Late {
    /// Creates a client from explicit options.
    ///
    /// Unset fields fall back to `LATE_API_KEY` and the defaults.
    ///
    /// ## Errors
    ///
    /// - `LateError::MissingCredential` when no API key can be found
    /// - `LateError::Config` for an unusable base URL, default header or key
    pub fn new(options: ClientOptions) -> Result<Self, LateError> {
        let options = options.resolve()?;

        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LateError::Config(format!("failed to build HTTP client: {e}")))?;

        let transport = Transport::new(http)
            .with_request_interceptor(DefaultHeaders::new(options.default_headers.clone()))
            .with_request_interceptor(BearerAuth::new(&options.api_key)?)
            .with_response_interceptor(ErrorNormalizer);

        debug!(
            base_url = %options.base_url,
            timeout_ms = options.timeout.as_millis() as u64,
            "Created Late client"
        );

        Ok(Self {
            inner: Arc::new(Inner { options, transport }),
        })
    }

    /// Creates a client configured entirely from the environment.
    ///
    /// ## Errors
    ///
    /// Returns `LateError::MissingCredential` when `LATE_API_KEY` is unset
    /// or blank.
    pub fn from_env() -> Result<Self, LateError> {
        Self::new(ClientOptions::default())
    }

    /// API root every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.inner.options.base_url
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.options.timeout
    }

    /// Every operation of the generated surface.
    pub fn operations(&self) -> &'static [Operation] {
        crate::generated::OPERATIONS
    }

    /// The HTTP pipeline of this client.
    pub fn transport(&self) -> &Transport {
        &self.inner.transport
    }

    /// Performs one operation and decodes the success body into `T`.
    ///
    /// Generated namespace methods are thin wrappers around this.
    ///
    /// ## Errors
    ///
    /// - `LateError::InvalidRequest` when a path parameter or header is
    ///   missing or malformed; nothing is sent
    /// - `LateError::RateLimit`, `Validation` or `Api` for failing statuses
    /// - `LateError::Transport` for network failures and timeouts
    /// - `LateError::Decode` when the body does not match `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        args: RequestArgs,
    ) -> Result<T, LateError> {
        let request = build_request(&self.inner, operation, &args)?;

        debug!(
            operation = %operation.qualified_name(),
            method = operation.verb.as_str(),
            url = %request.url(),
            "Dispatching request"
        );

        match self.inner.transport.send(request).await {
            Ok(response) => {
                debug!(
                    operation = %operation.qualified_name(),
                    status = response.status.as_u16(),
                    bytes = response.body.len(),
                    "Received response"
                );
                response.decode()
            }
            Err(err) => {
                warn!(
                    operation = %operation.qualified_name(),
                    status = ?err.status(),
                    error = %err,
                    "Request failed"
                );
                Err(err)
            }
        }
    }
}

impl fmt::Debug for Late {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Late")
            .field("options", &self.inner.options)
            .field("transport", &self.inner.transport)
            .finish()
    }
}

fn method_for(verb: HttpVerb) -> Method {
    match verb {
        HttpVerb::Get => Method::GET,
        HttpVerb::Post => Method::POST,
        HttpVerb::Put => Method::PUT,
        HttpVerb::Patch => Method::PATCH,
        HttpVerb::Delete => Method::DELETE,
    }
}

fn build_request(
    inner: &Inner,
    operation: &Operation,
    args: &RequestArgs,
) -> Result<reqwest::Request, LateError> {
    let url = args.url(&inner.options.url, operation.path)?;
    let headers = args.header_map()?;

    let mut builder = inner
        .transport
        .http()
        .request(method_for(operation.verb), url)
        .headers(headers);
    if let Some(body) = args.body() {
        builder = builder.json(body);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> Late {
        Late::new(
            ClientOptions::new()
                .api_key("sk_test")
                .base_url("https://example.test/api/")
                .default_header("X-Team", "growth"),
        )
        .unwrap()
    }

    #[test]
    fn every_verb_maps_to_a_method() {
        assert_eq!(method_for(HttpVerb::Get), Method::GET);
        assert_eq!(method_for(HttpVerb::Patch), Method::PATCH);
        assert_eq!(method_for(HttpVerb::Delete), Method::DELETE);
    }

    #[test]
    fn build_request_resolves_path_body_and_headers() {
        let client = client();
        let op = Operation::new("posts", "updatePost", HttpVerb::Put, "/v1/posts/{postId}");
        let args = RequestArgs::new()
            .path_param("postId", "p_1")
            .json(json!({ "content": "edited" }))
            .header("X-Trace", "abc");

        let request = build_request(&client.inner, &op, &args).unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().as_str(), "https://example.test/api/v1/posts/p_1");
        assert_eq!(request.headers().get("x-trace").unwrap(), "abc");
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert!(request.body().is_some());
    }

    #[test]
    fn build_request_without_body_has_no_content_type() {
        let client = client();
        let op = Operation::new("posts", "listPosts", HttpVerb::Get, "/v1/posts");

        let request = build_request(&client.inner, &op, &RequestArgs::new()).unwrap();

        assert!(request.body().is_none());
        assert!(request.headers().get("content-type").is_none());
    }

    #[test]
    fn accessors_reflect_resolved_options() {
        let client = client();
        assert_eq!(client.base_url(), "https://example.test/api/");
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(
            client.transport().request_interceptors(),
            ["default_headers", "bearer_auth"]
        );
        assert_eq!(client.transport().response_interceptors(), ["error_normalizer"]);
    }

    #[test]
    fn debug_output_never_contains_the_key() {
        assert!(!format!("{:?}", client()).contains("sk_test"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn execute_logs_dispatch_and_failure_without_the_key() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = Late::new(
            ClientOptions::new()
                .api_key("sk_secret_value")
                .base_url(server.uri()),
        )
        .unwrap();
        let op = Operation::new("posts", "listPosts", HttpVerb::Get, "/v1/posts");

        let err = client
            .execute::<serde_json::Value>(&op, RequestArgs::new())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(logs_contain("Dispatching request"));
        assert!(logs_contain("Request failed"));
        assert!(logs_contain("posts.listPosts"));
        assert!(!logs_contain("sk_secret_value"));
    }

    #[test]
    fn clones_share_state() {
        let a = client();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.inner, &b.inner));
    }
}
