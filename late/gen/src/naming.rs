//! Name derivation for namespaces, methods and Rust identifiers.
//!
//! ## Synthesized method names
//!
//! Operations without a stable identifier get a name derived from their verb
//! and path:
//!
//! - version segments (`v1`) are dropped
//! - each `{param}` becomes `By<Param>`
//! - literal segments are pascal-cased (`select-page` -> `SelectPage`)
//! - the verb contributes the prefix: `get` -> `list` (no placeholders) or
//!   `get`, `post` -> `create`, `put`/`patch` -> `update`, `delete` -> `delete`
//!
//! ```
//! use late_define::HttpVerb;
//! use late_gen::naming::synthesize_method_name;
//!
//! assert_eq!(synthesize_method_name(HttpVerb::Get, "/v1/posts"), "listPosts");
//! assert_eq!(
//!     synthesize_method_name(HttpVerb::Get, "/v1/posts/{postId}/comments"),
//!     "getPostsByPostIdComments"
//! );
//! ```

use late_define::HttpVerb;

use crate::parser::{is_version_segment, path_segments, placeholder_name};

/// Namespace used when a tag sanitizes to nothing.
pub const FALLBACK_NAMESPACE: &str = "other";

/// Synthesizes a camel-case method name from a verb and path template.
pub fn synthesize_method_name(verb: HttpVerb, path: &str) -> String {
    let has_params = path_segments(path).any(|segment| placeholder_name(segment).is_some());

    let mut name = verb_prefix(verb, has_params).to_string();
    for segment in path_segments(path) {
        if let Some(param) = placeholder_name(segment) {
            name.push_str("By");
            name.push_str(&to_pascal_case(param));
        } else if !is_version_segment(segment) {
            name.push_str(&to_pascal_case(segment));
        }
    }
    name
}

fn verb_prefix(verb: HttpVerb, has_params: bool) -> &'static str {
    match verb {
        HttpVerb::Get if has_params => "get",
        HttpVerb::Get => "list",
        HttpVerb::Post => "create",
        HttpVerb::Put | HttpVerb::Patch => "update",
        HttpVerb::Delete => "delete",
    }
}

/// Lower-cases a tag and strips whitespace and punctuation.
///
/// ```
/// use late_gen::naming::sanitize_namespace;
///
/// assert_eq!(sanitize_namespace("LinkedIn Mentions"), "linkedinmentions");
/// assert_eq!(sanitize_namespace("Other"), "other");
/// ```
pub fn sanitize_namespace(tag: &str) -> String {
    let sanitized: String = tag
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if sanitized.is_empty() {
        FALLBACK_NAMESPACE.to_string()
    } else {
        sanitized
    }
}

/// Splits an identifier into words on punctuation and case boundaries.
///
/// ```
/// use late_gen::naming::split_words;
///
/// assert_eq!(split_words("createPost"), vec!["create", "Post"]);
/// assert_eq!(split_words("select-page"), vec!["select", "page"]);
/// assert_eq!(split_words("HTTPClient"), vec!["HTTP", "Client"]);
/// ```
pub fn split_words(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .flat_map(split_camel_case)
        .collect()
}

/// Splits a CamelCase string into individual words.
///
/// - "accountGroups" -> ["account", "Groups"]
/// - "getMediaPresignedUrl" -> ["get", "Media", "Presigned", "Url"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "getV1Posts" -> ["get", "V1", "Posts"]
fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for i in 1..chars.len() {
        let (byte_idx, current) = chars[i];
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

        // "ollamaNext" -> "ollama", "Next"; "HTTPClient" -> "HTTP", "Client"
        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (next_is_lower && prev.is_uppercase()));

        if is_new_word {
            if byte_idx > word_start {
                words.push(&s[word_start..byte_idx]);
            }
            word_start = byte_idx;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}

/// `createPost` -> `create_post`.
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `createPost` -> `CREATE_POST`.
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// `accountGroups` -> `AccountGroups`, `bulk-upload` -> `BulkUpload`.
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|word| capitalize(word)).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
