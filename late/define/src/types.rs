//! Core types shared by the generator and the generated client.
//!
//! - [`HttpVerb`] - The five HTTP verbs the API surface supports
//! - [`OperationDescriptor`] - One endpoint + verb pair parsed from a description
//! - [`Operation`] - The `'static` record emitted for every generated method
//! - [`placeholder_name`] - `{param}` segment detection shared with the client

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP verbs that produce generated methods.
///
/// Description keys are matched case-insensitively. Anything else found in a
/// path item (`head`, `options`, `parameters`, ...) is not part of the
/// generated surface.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use late_define::HttpVerb;
///
/// assert_eq!(HttpVerb::from_str("get").unwrap(), HttpVerb::Get);
/// assert_eq!(HttpVerb::Patch.to_string(), "PATCH");
/// assert!(HttpVerb::from_str("head").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpVerb {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
}

impl HttpVerb {
    /// Upper-case wire name of the verb.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One remote endpoint as described by the API description.
///
/// ## Examples
///
/// ```
/// use late_define::{HttpVerb, OperationDescriptor};
///
/// let op = OperationDescriptor {
///     path: "/v1/posts/{postId}".to_string(),
///     verb: HttpVerb::Get,
///     tags: vec!["Posts".to_string()],
///     operation_id: Some("getPost".to_string()),
///     summary: None,
/// };
///
/// assert_eq!(op.first_tag(), Some("Posts"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Path template (e.g. `/v1/posts/{postId}`).
    pub path: String,
    /// HTTP verb.
    pub verb: HttpVerb,
    /// Category tags, in description order.
    pub tags: Vec<String>,
    /// Stable identifier (`operationId`), if the description assigns one.
    pub operation_id: Option<String>,
    /// Short human-readable summary.
    pub summary: Option<String>,
}

impl OperationDescriptor {
    /// Returns the first category tag, if any.
    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

}

/// Returns the parameter name when `segment` is a whole `{param}` placeholder.
///
/// Both the generator and the client use this to tell placeholders from
/// literal path segments; `{}` is a literal.
///
/// ```
/// use late_define::placeholder_name;
///
/// assert_eq!(placeholder_name("{platform}"), Some("platform"));
/// assert_eq!(placeholder_name("telegram"), None);
/// assert_eq!(placeholder_name("{}"), None);
/// ```
pub fn placeholder_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

/// Static description of a generated method.
///
/// Every generated namespace method forwards one of these to the client,
/// which substitutes path parameters and dispatches the request.
///
/// ## Examples
///
/// ```
/// use late_define::{HttpVerb, Operation};
///
/// const CREATE_POST: Operation = Operation::new("posts", "createPost", HttpVerb::Post, "/v1/posts");
/// assert_eq!(CREATE_POST.qualified_name(), "posts.createPost");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// Namespace path, with nested namespaces joined by `.` (e.g. `connect.telegram`).
    pub namespace: &'static str,
    /// Public method name as it appears in the namespace map (e.g. `createPost`).
    pub name: &'static str,
    /// HTTP verb.
    pub verb: HttpVerb,
    /// Path template relative to the client's base URL.
    pub path: &'static str,
}

impl Operation {
    /// Creates an operation record.
    pub const fn new(
        namespace: &'static str,
        name: &'static str,
        verb: HttpVerb,
        path: &'static str,
    ) -> Self {
        Self {
            namespace,
            name,
            verb,
            path,
        }
    }

    /// Returns `namespace.name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn http_verb_display_uppercase() {
        assert_eq!(HttpVerb::Get.to_string(), "GET");
        assert_eq!(HttpVerb::Post.to_string(), "POST");
        assert_eq!(HttpVerb::Put.to_string(), "PUT");
        assert_eq!(HttpVerb::Patch.to_string(), "PATCH");
        assert_eq!(HttpVerb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn http_verb_from_str_ignores_case() {
        assert_eq!(HttpVerb::from_str("get").unwrap(), HttpVerb::Get);
        assert_eq!(HttpVerb::from_str("POST").unwrap(), HttpVerb::Post);
        assert_eq!(HttpVerb::from_str("Delete").unwrap(), HttpVerb::Delete);
    }

    #[test]
    fn http_verb_rejects_unsupported_verbs() {
        for key in ["head", "options", "trace", "parameters", ""] {
            assert!(HttpVerb::from_str(key).is_err(), "{key} should not parse");
        }
    }

    #[test]
    fn http_verb_iter_all_variants() {
        assert_eq!(HttpVerb::iter().count(), 5);
    }

    #[test]
    fn http_verb_as_str_matches_display() {
        for verb in HttpVerb::iter() {
            assert_eq!(verb.as_str(), verb.to_string());
        }
    }

    #[test]
    fn http_verb_serde_lowercase() {
        let serialized = serde_json::to_string(&HttpVerb::Patch).unwrap();
        assert_eq!(serialized, "\"patch\"");
    }

    #[test]
    fn placeholder_requires_a_whole_braced_segment() {
        assert_eq!(placeholder_name("{postId}"), Some("postId"));
        assert_eq!(placeholder_name("{postId"), None);
        assert_eq!(placeholder_name("postId}"), None);
        assert_eq!(placeholder_name("{}"), None);
        assert_eq!(placeholder_name("posts"), None);
    }

    #[test]
    fn first_tag_none_when_untagged() {
        let op = OperationDescriptor {
            path: "/v1/health".to_string(),
            verb: HttpVerb::Get,
            tags: vec![],
            operation_id: None,
            summary: None,
        };
        assert_eq!(op.first_tag(), None);
    }
}
