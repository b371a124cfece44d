//! Shared test utilities for late-gen tests.

use late_define::{ApiDescription, HttpVerb, OperationDescriptor};
use proc_macro2::TokenStream;

/// Creates an operation descriptor without a summary.
///
/// ## Arguments
///
/// * `verb` - HTTP verb
/// * `path` - Path template (may contain `{param}` placeholders)
/// * `tags` - Tags in description order (only the first one counts)
/// * `id` - Stable identifier; `None` makes the generator synthesize a name
pub fn op(verb: HttpVerb, path: &str, tags: &[&str], id: Option<&str>) -> OperationDescriptor {
    OperationDescriptor {
        path: path.to_string(),
        verb,
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        operation_id: id.map(str::to_string),
        summary: None,
    }
}

/// A small description covering aliases, connect nesting and untagged operations.
pub fn sample_description() -> ApiDescription {
    ApiDescription::from_yaml_str(
        r#"
openapi: 3.0.3
info:
  title: Late API
  version: 1.0.0
paths:
  /v1/posts:
    get:
      tags: [Posts]
      operationId: listPosts
      summary: List posts
    post:
      tags: [Posts]
      operationId: createPost
      summary: Create a post
  /v1/accounts/{accountId}/gmb-reviews:
    get:
      tags: [GMB Reviews]
      operationId: getGoogleBusinessReviews
  /v1/accounts/{accountId}/reviews/{reviewId}/reply:
    post:
      tags: [Reviews]
      operationId: replyToReview
  /v1/connect/{platform}:
    get:
      tags: [Connect]
      operationId: getConnectUrl
  /v1/connect/telegram:
    get:
      tags: [Connect]
      operationId: getTelegramConnectStatus
  /v1/health:
    get:
      summary: Health check
"#,
    )
    .expect("sample description should parse")
}

/// Validates that generated code is syntactically correct.
///
/// ## Errors
///
/// Returns an error string if the generated code fails to parse.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<(), String> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(())
}

/// Formats generated code using prettyplease.
///
/// ## Errors
///
/// Returns an error string if the code fails to parse.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(prettyplease::unparse(&file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_creates_descriptor() {
        let descriptor = op(HttpVerb::Get, "/v1/users/{userId}", &["Users"], Some("getUser"));
        assert_eq!(descriptor.path, "/v1/users/{userId}");
        assert_eq!(descriptor.first_tag(), Some("Users"));
        assert_eq!(descriptor.operation_id.as_deref(), Some("getUser"));
    }

    #[test]
    fn sample_description_parses_every_operation() {
        let description = sample_description();
        assert_eq!(description.operations().len(), 7);
        assert_eq!(description.info().unwrap().title, "Late API");
    }
}
