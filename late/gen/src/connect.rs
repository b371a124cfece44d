//! OAuth provider detection for the `connect` namespace.
//!
//! Connect operations for different platforms would otherwise produce
//! ambiguous flat names, so operations whose path names a known provider
//! are nested under a per-provider sub-namespace (`connect.telegram`).

use crate::parser::{path_segments, placeholder_name};

/// The namespace that receives provider sub-namespaces.
pub const CONNECT_NAMESPACE: &str = "connect";

/// Known provider path segments and their canonical sub-namespace names.
pub const CONNECT_PROVIDERS: &[(&str, &str)] = &[
    ("facebook", "facebook"),
    ("instagram", "instagram"),
    ("linkedin", "linkedin"),
    ("pinterest", "pinterest"),
    ("googlebusiness", "googleBusiness"),
    ("google-business", "googleBusiness"),
    ("telegram", "telegram"),
    ("snapchat", "snapchat"),
    ("bluesky", "bluesky"),
    ("tiktok", "tiktok"),
    ("youtube", "youtube"),
    ("twitter", "twitter"),
    ("threads", "threads"),
    ("reddit", "reddit"),
];

/// Returns the canonical provider for the first path segment that names one.
///
/// Placeholder segments never match, so `/v1/connect/{platform}` stays flat.
///
/// ## Examples
///
/// ```
/// use late_gen::connect::provider_for_path;
///
/// assert_eq!(provider_for_path("/v1/connect/telegram"), Some("telegram"));
/// assert_eq!(
///     provider_for_path("/v1/connect/googlebusiness/locations"),
///     Some("googleBusiness")
/// );
/// assert_eq!(provider_for_path("/v1/connect/{platform}"), None);
/// ```
pub fn provider_for_path(path: &str) -> Option<&'static str> {
    path_segments(path)
        .filter(|segment| placeholder_name(segment).is_none())
        .find_map(canonical_provider)
}

fn canonical_provider(segment: &str) -> Option<&'static str> {
    CONNECT_PROVIDERS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(segment))
        .map(|(_, canonical)| *canonical)
}
