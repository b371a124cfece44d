//! Grouping of operations into namespaces.
//!
//! Each operation goes to exactly one namespace, chosen from its first tag
//! through [`TAG_ALIASES`]. Tags missing from the table become namespaces of
//! their own (lower-cased, whitespace stripped). Untagged operations use the
//! `Other` tag.
//!
//! Inside a namespace, method names are unique: inserting a second binding
//! under an existing name replaces the first one in place (last write wins).
//! Stable identifiers are assumed to be globally unique, so in practice this
//! only happens to synthesized names.
//!
//! ## Examples
//!
//! ```
//! use late_define::ApiDescription;
//! use late_gen::grouping::NamespaceMap;
//!
//! let description = ApiDescription::from_yaml_str(r#"
//! paths:
//!   /v1/posts:
//!     get: { tags: [Posts], operationId: listPosts }
//!     post: { tags: [Posts], operationId: createPost }
//!   /v1/connect/telegram:
//!     get: { tags: [Connect], operationId: getTelegramConnectStatus }
//! "#).unwrap();
//!
//! let map = NamespaceMap::build(&description);
//! let posts = map.get("posts").unwrap();
//! assert!(posts.method("createPost").is_some());
//!
//! let telegram = map.get("connect").unwrap().child("telegram").unwrap();
//! assert!(telegram.method("getTelegramConnectStatus").is_some());
//! ```

use indexmap::IndexMap;
use late_define::{ApiDescription, HttpVerb, OperationDescriptor};
use tracing::{debug, warn};

use crate::connect::{CONNECT_NAMESPACE, provider_for_path};
use crate::naming::{sanitize_namespace, synthesize_method_name};

/// Tag used for operations without tags.
pub const UNTAGGED: &str = "Other";

/// Fixed tag -> namespace aliases.
///
/// Several tags may share a namespace (both review tags land in `accounts`).
pub const TAG_ALIASES: &[(&str, &str)] = &[
    ("Posts", "posts"),
    ("Accounts", "accounts"),
    ("GMB Reviews", "accounts"),
    ("Reviews", "accounts"),
    ("Profiles", "profiles"),
    ("Analytics", "analytics"),
    ("Account Groups", "accountGroups"),
    ("Queue", "queue"),
    ("Webhooks", "webhooks"),
    ("API Keys", "apiKeys"),
    ("Media", "media"),
    ("Tools", "tools"),
    ("Users", "users"),
    ("Usage", "usage"),
    ("Logs", "logs"),
    ("Connect", "connect"),
    ("Reddit Search", "reddit"),
    ("Invites", "invites"),
];

/// Resolves the namespace for a tag.
///
/// ```
/// use late_gen::grouping::namespace_for_tag;
///
/// assert_eq!(namespace_for_tag("Account Groups"), "accountGroups");
/// assert_eq!(namespace_for_tag("GMB Reviews"), "accounts");
/// assert_eq!(namespace_for_tag("Comment Moderation"), "commentmoderation");
/// ```
pub fn namespace_for_tag(tag: &str) -> String {
    TAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == tag)
        .map(|(_, namespace)| (*namespace).to_string())
        .unwrap_or_else(|| sanitize_namespace(tag))
}

/// A public method name bound to the operation it calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    /// Public method name (camel case, e.g. `createPost`).
    pub name: String,
    /// `true` when the description had no stable identifier.
    pub synthesized: bool,
    /// The originating operation.
    pub operation: OperationDescriptor,
}

impl MethodBinding {
    /// Binds an operation under its stable identifier, or a synthesized name.
    pub fn from_operation(operation: &OperationDescriptor) -> Self {
        match &operation.operation_id {
            Some(id) => Self {
                name: id.clone(),
                synthesized: false,
                operation: operation.clone(),
            },
            None => Self {
                name: synthesize_method_name(operation.verb, &operation.path),
                synthesized: true,
                operation: operation.clone(),
            },
        }
    }

    /// HTTP verb of the bound operation.
    pub fn verb(&self) -> HttpVerb {
        self.operation.verb
    }

    /// Path template of the bound operation.
    pub fn path(&self) -> &str {
        &self.operation.path
    }

    /// Summary of the bound operation, if any.
    pub fn summary(&self) -> Option<&str> {
        self.operation.summary.as_deref()
    }
}

/// A named group of method bindings, optionally with nested groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    methods: IndexMap<String, MethodBinding>,
    children: IndexMap<String, Namespace>,
}

impl Namespace {
    /// Creates an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// The namespace name (e.g. `accountGroups`, `telegram`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bindings in insertion order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodBinding> {
        self.methods.values()
    }

    /// Looks up a binding by public name.
    pub fn method(&self, name: &str) -> Option<&MethodBinding> {
        self.methods.get(name)
    }

    /// Nested namespaces in discovery order.
    pub fn children(&self) -> impl Iterator<Item = &Namespace> {
        self.children.values()
    }

    /// Looks up a nested namespace.
    pub fn child(&self, name: &str) -> Option<&Namespace> {
        self.children.get(name)
    }

    /// Number of methods directly on this namespace.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// `true` when the namespace has no methods of its own.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Inserts a binding, returning the binding it replaced.
    ///
    /// A replaced binding keeps its position; only its value changes.
    pub fn insert(&mut self, binding: MethodBinding) -> Option<MethodBinding> {
        self.methods.insert(binding.name.clone(), binding)
    }

    fn child_mut(&mut self, name: &str) -> &mut Namespace {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Namespace::new(name))
    }
}

/// Namespaces in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    namespaces: IndexMap<String, Namespace>,
}

impl NamespaceMap {
    /// Groups every operation of a description.
    pub fn build(description: &ApiDescription) -> Self {
        Self::from_operations(description.operations())
    }

    /// Groups operations in the given order.
    pub fn from_operations(operations: &[OperationDescriptor]) -> Self {
        let mut map = Self::default();
        for operation in operations {
            map.add(operation);
        }
        map
    }

    fn add(&mut self, operation: &OperationDescriptor) {
        let namespace_name = namespace_for_tag(operation.first_tag().unwrap_or(UNTAGGED));
        let binding = MethodBinding::from_operation(operation);

        let namespace = self
            .namespaces
            .entry(namespace_name.clone())
            .or_insert_with(|| Namespace::new(namespace_name.clone()));

        let target = match provider_for_path(&operation.path) {
            Some(provider) if namespace_name == CONNECT_NAMESPACE => namespace.child_mut(provider),
            _ => namespace,
        };

        debug!(
            namespace = %namespace_name,
            target = target.name(),
            method = %binding.name,
            verb = %binding.verb(),
            path = binding.path(),
            "Bound operation"
        );

        let name = binding.name.clone();
        if let Some(replaced) = target.insert(binding) {
            warn!(
                namespace = %namespace_name,
                method = %name,
                replaced_path = replaced.path(),
                replaced_verb = %replaced.verb(),
                "Method name collision; keeping the later operation"
            );
        }
    }

    /// Looks up a top-level namespace.
    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Top-level namespaces in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    /// Number of top-level namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// `true` when no operation was grouped.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Every namespace with its dotted path, parents before their children.
    pub fn walk(&self) -> Vec<(String, &Namespace)> {
        let mut out = Vec::new();
        for namespace in self.iter() {
            out.push((namespace.name().to_string(), namespace));
            for child in namespace.children() {
                out.push((format!("{}.{}", namespace.name(), child.name()), child));
            }
        }
        out
    }

    /// Total number of bindings across all namespaces.
    pub fn method_count(&self) -> usize {
        self.walk().iter().map(|(_, namespace)| namespace.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::op;
    use tracing_test::traced_test;

    #[test]
    fn untagged_operations_land_in_other() {
        let map = NamespaceMap::from_operations(&[op(HttpVerb::Get, "/v1/health", &[], None)]);
        let other = map.get("other").unwrap();
        assert!(other.method("listHealth").is_some());
    }

    #[test]
    fn only_first_tag_counts() {
        let map = NamespaceMap::from_operations(&[op(
            HttpVerb::Get,
            "/v1/analytics",
            &["Analytics", "Posts"],
            Some("getAnalytics"),
        )]);
        assert!(map.get("analytics").is_some());
        assert!(map.get("posts").is_none());
    }

    #[test]
    fn review_tags_share_accounts() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/accounts", &["Accounts"], Some("listAccounts")),
            op(
                HttpVerb::Get,
                "/v1/accounts/{accountId}/gmb-reviews",
                &["GMB Reviews"],
                Some("getGoogleBusinessReviews"),
            ),
            op(
                HttpVerb::Post,
                "/v1/accounts/{accountId}/reviews/{reviewId}/reply",
                &["Reviews"],
                Some("replyToReview"),
            ),
        ]);

        assert_eq!(map.len(), 1);
        let accounts = map.get("accounts").unwrap();
        let names: Vec<_> = accounts.methods().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["listAccounts", "getGoogleBusinessReviews", "replyToReview"]
        );
    }

    #[test]
    fn unknown_tags_become_sanitized_namespaces() {
        let map = NamespaceMap::from_operations(&[op(
            HttpVerb::Get,
            "/v1/comments",
            &["Comment Moderation"],
            Some("listComments"),
        )]);
        assert!(map.get("commentmoderation").is_some());
    }

    #[test]
    fn connect_providers_are_nested() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/connect/{platform}", &["Connect"], Some("getConnectUrl")),
            op(
                HttpVerb::Post,
                "/v1/connect/telegram",
                &["Connect"],
                Some("initiateTelegramConnect"),
            ),
        ]);

        let connect = map.get("connect").unwrap();
        assert!(connect.method("getConnectUrl").is_some());
        assert!(connect.method("initiateTelegramConnect").is_none());
        assert!(
            connect
                .child("telegram")
                .unwrap()
                .method("initiateTelegramConnect")
                .is_some()
        );
    }

    #[test]
    fn provider_segments_outside_connect_stay_flat() {
        let map = NamespaceMap::from_operations(&[op(
            HttpVerb::Get,
            "/v1/analytics/youtube/daily-views",
            &["Analytics"],
            Some("getYouTubeDailyViews"),
        )]);
        let analytics = map.get("analytics").unwrap();
        assert!(analytics.method("getYouTubeDailyViews").is_some());
        assert_eq!(analytics.children().count(), 0);
    }

    #[test]
    #[traced_test]
    fn synthesized_collisions_keep_the_later_operation() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Put, "/v1/posts/{postId}", &["Posts"], None),
            op(HttpVerb::Get, "/v1/posts", &["Posts"], None),
            op(HttpVerb::Patch, "/v1/posts/{postId}", &["Posts"], None),
        ]);

        let posts = map.get("posts").unwrap();
        assert_eq!(posts.len(), 2);

        let names: Vec<_> = posts.methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["updatePostsByPostId", "listPosts"]);

        let update = posts.method("updatePostsByPostId").unwrap();
        assert_eq!(update.verb(), HttpVerb::Patch);
        assert!(update.synthesized);
        assert!(logs_contain("Method name collision"));
    }

    #[test]
    fn namespaces_keep_discovery_order() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/usage-stats", &["Usage"], Some("getUsageStats")),
            op(HttpVerb::Get, "/v1/posts", &["Posts"], Some("listPosts")),
            op(HttpVerb::Get, "/v1/logs", &["Logs"], Some("listLogs")),
            op(HttpVerb::Post, "/v1/posts", &["Posts"], Some("createPost")),
        ]);

        let names: Vec<_> = map.iter().map(Namespace::name).collect();
        assert_eq!(names, ["usage", "posts", "logs"]);
    }

    #[test]
    fn walk_lists_children_after_parent() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/connect/telegram", &["Connect"], Some("getTelegramConnectStatus")),
            op(HttpVerb::Get, "/v1/connect/pending-data", &["Connect"], Some("getPendingOAuthData")),
        ]);

        let paths: Vec<_> = map.walk().into_iter().map(|(path, _)| path).collect();
        assert_eq!(paths, ["connect", "connect.telegram"]);
        assert_eq!(map.method_count(), 2);
    }
}
