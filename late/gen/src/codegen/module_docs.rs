//! Module documentation for the generated surface.
//!
//! This module provides the [`ModuleDocBuilder`] struct, which renders the
//! `//!` header of the generated file: an introduction naming the API, the
//! authentication note, the namespace list and a short usage example.

use late_define::ApiDescription;
use proc_macro2::TokenStream;
use quote::quote;

use super::namespace_paths;
use crate::codegen::idents::member_ident;
use crate::grouping::NamespaceMap;

/// Builds module-level documentation for the generated surface.
///
/// ## Examples
///
/// ```ignore
/// use late_gen::codegen::ModuleDocBuilder;
///
/// let doc_tokens = ModuleDocBuilder::new(&description, &map).build();
/// ```
pub struct ModuleDocBuilder<'a> {
    description: &'a ApiDescription,
    map: &'a NamespaceMap,
}

impl<'a> ModuleDocBuilder<'a> {
    /// Creates a new builder.
    pub fn new(description: &'a ApiDescription, map: &'a NamespaceMap) -> Self {
        Self { description, map }
    }

    /// Builds the `#![doc = "..."]` attributes for the module.
    ///
    /// One attribute per line, so prettyplease renders plain `//!` comments.
    pub fn build(&self) -> TokenStream {
        let sections = [
            self.intro_paragraph(),
            self.auth_section(),
            self.namespaces_section(),
            self.example_section(),
        ];
        let text = sections.join("\n\n");
        let lines = text.lines();

        quote! {
            #(#![doc = #lines])*
        }
    }

    /// Title and version of the description, when it has them.
    fn intro_paragraph(&self) -> String {
        match self.description.info() {
            Some(info) if !info.title.is_empty() && !info.version.is_empty() => format!(
                " Generated namespace surface for {} (version {}).",
                info.title, info.version
            ),
            Some(info) if !info.title.is_empty() => {
                format!(" Generated namespace surface for {}.", info.title)
            }
            _ => " Generated namespace surface.".to_string(),
        }
    }

    fn auth_section(&self) -> String {
        " ## Authentication\n\n Every request carries `Authorization: Bearer <key>`. \
         Set via environment variable: `LATE_API_KEY`."
            .to_string()
    }

    /// Lists every namespace with its method count.
    fn namespaces_section(&self) -> String {
        let paths = namespace_paths(self.map);
        if paths.is_empty() {
            return " ## Namespaces\n\n No operations defined.".to_string();
        }

        let mut lines = vec![" ## Namespaces".to_string(), String::new()];
        for (path, namespace) in paths {
            let count = namespace.len();
            let noun = if count == 1 { "method" } else { "methods" };
            lines.push(format!(" - `{}` ({count} {noun})", path.join(".")));
        }
        lines.join("\n")
    }

    /// Uses the first method of the first top-level namespace that has one.
    fn example_section(&self) -> String {
        let first = self
            .map
            .iter()
            .find_map(|namespace| namespace.methods().next().map(|m| (namespace, m)));

        let Some((namespace, binding)) = first else {
            return " ## Example\n\n No operations available for example.".to_string();
        };

        let accessor = member_ident(namespace.name());
        let method = member_ident(&binding.name);

        format!(
            r#" ## Example

 ```ignore
 use late::prelude::*;

 #[tokio::main]
 async fn main() -> Result<(), LateError> {{
     let client = Late::from_env()?;
     let response: serde_json::Value = client.{accessor}().{method}(RequestArgs::new()).await?;
     println!("{{response}}");
     Ok(())
 }}
 ```"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{op, sample_description};
    use late_define::HttpVerb;

    #[test]
    fn builder_creates_valid_tokenstream() {
        let description = sample_description();
        let map = NamespaceMap::build(&description);
        let tokens = ModuleDocBuilder::new(&description, &map).build();
        assert!(!tokens.is_empty());
    }

    #[test]
    fn intro_names_title_and_version() {
        let description = sample_description();
        let map = NamespaceMap::build(&description);
        let intro = ModuleDocBuilder::new(&description, &map).intro_paragraph();
        assert!(intro.contains("Late API"));
        assert!(intro.contains("version 1.0.0"));
    }

    #[test]
    fn intro_without_info_is_generic() {
        let description =
            ApiDescription::from_operations(vec![op(HttpVerb::Get, "/v1/posts", &["Posts"], None)]);
        let map = NamespaceMap::build(&description);
        let intro = ModuleDocBuilder::new(&description, &map).intro_paragraph();
        assert_eq!(intro, " Generated namespace surface.");
    }

    #[test]
    fn namespaces_section_lists_nested_paths_with_counts() {
        let description = sample_description();
        let map = NamespaceMap::build(&description);
        let section = ModuleDocBuilder::new(&description, &map).namespaces_section();

        assert!(section.contains("- `posts` (2 methods)"));
        assert!(section.contains("- `connect.telegram` (1 method)"));
    }

    #[test]
    fn example_uses_first_namespace_method() {
        let description = sample_description();
        let map = NamespaceMap::build(&description);
        let example = ModuleDocBuilder::new(&description, &map).example_section();
        assert!(example.contains("client.posts().list_posts(RequestArgs::new())"));
    }

    #[test]
    fn empty_surface_has_placeholder_sections() {
        let description = ApiDescription::from_operations(Vec::new());
        let map = NamespaceMap::build(&description);
        let builder = ModuleDocBuilder::new(&description, &map);
        assert!(builder.namespaces_section().contains("No operations defined"));
        assert!(builder.example_section().contains("No operations available"));
    }
}
