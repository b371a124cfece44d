//! Client configuration.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::LateError;

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "LATE_API_KEY";

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://getlate.dev/api";

/// Per-call timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("late-rust/", env!("CARGO_PKG_VERSION"));

/// Options for [`Late::new`](crate::Late::new).
///
/// Every field is optional; unset fields fall back to the environment or the
/// defaults above.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use late::ClientOptions;
///
/// let options = ClientOptions::new()
///     .api_key("sk_live_123")
///     .base_url("https://staging.getlate.dev/api")
///     .timeout(Duration::from_secs(10))
///     .default_header("X-Team", "growth");
///
/// assert_eq!(options.timeout, Some(Duration::from_secs(10)));
/// assert!(!format!("{options:?}").contains("sk_live_123"));
/// ```
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// API key; `LATE_API_KEY` when unset.
    pub api_key: Option<String>,
    /// API root; [`DEFAULT_BASE_URL`] when unset. Kept verbatim for
    /// [`Late::base_url`](crate::Late::base_url); trailing slashes are
    /// ignored when building request URLs.
    pub base_url: Option<String>,
    /// Per-call timeout; [`DEFAULT_TIMEOUT`] when unset.
    pub timeout: Option<Duration>,
    /// Headers added to every request unless the call sets them itself.
    pub default_headers: Vec<(String, String)>,
}

impl ClientOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a default header.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Resolves the options against `LATE_API_KEY`.
    pub(crate) fn resolve(self) -> Result<ResolvedOptions, LateError> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        self.resolve_with(env_key)
    }

    /// Resolves the options, using `env_key` as the environment fallback.
    pub(crate) fn resolve_with(self, env_key: Option<String>) -> Result<ResolvedOptions, LateError> {
        let api_key = non_blank(self.api_key)
            .or_else(|| non_blank(env_key))
            .ok_or(LateError::MissingCredential {
                env_var: API_KEY_ENV,
            })?;

        let base_url =
            non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| LateError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if url.cannot_be_a_base() {
            return Err(LateError::Config(format!(
                "base URL '{base_url}' must be an absolute http(s) URL"
            )));
        }

        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| LateError::Config(format!("default header name '{name}': {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| LateError::Config(format!("default header '{name}' value: {e}")))?;
            default_headers.insert(header_name, header_value);
        }

        Ok(ResolvedOptions {
            api_key,
            base_url,
            url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            default_headers,
        })
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

/// Options after defaults and the environment have been applied.
#[derive(Clone)]
pub(crate) struct ResolvedOptions {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) url: Url,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: HeaderMap,
}

impl fmt::Debug for ResolvedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
