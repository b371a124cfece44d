//! Operation table generation.
//!
//! Emits one `pub const` [`Operation`](late_define::Operation) per method
//! binding and the `OPERATIONS` slice listing all of them in emission order.

use late_define::HttpVerb;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::idents::const_ident;
use super::namespace_paths;
use crate::grouping::NamespaceMap;

/// Generates the operation consts and the `OPERATIONS` table.
///
/// ## Examples
///
/// ```ignore
/// // Produces:
/// /// `POST /v1/posts`
/// pub const POSTS_CREATE_POST: Operation =
///     Operation::new("posts", "createPost", HttpVerb::Post, "/v1/posts");
///
/// /// Every generated operation, namespace by namespace.
/// pub const OPERATIONS: &[Operation] = &[POSTS_CREATE_POST];
/// ```
pub fn generate_operation_table(map: &NamespaceMap) -> TokenStream {
    let mut consts = Vec::new();
    let mut idents = Vec::new();

    for (path, namespace) in namespace_paths(map) {
        let namespace_path = path.join(".");
        for binding in namespace.methods() {
            let ident = const_ident(&path, &binding.name);
            let name = &binding.name;
            let verb = verb_tokens(binding.verb());
            let route = binding.path();
            let doc = format!(" `{} {}`", binding.verb(), route);

            consts.push(quote! {
                #[doc = #doc]
                pub const #ident: Operation = Operation::new(#namespace_path, #name, #verb, #route);
            });
            idents.push(ident);
        }
    }

    quote! {
        #(#consts)*

        /// Every generated operation, namespace by namespace.
        pub const OPERATIONS: &[Operation] = &[#(#idents),*];
    }
}

fn verb_tokens(verb: HttpVerb) -> TokenStream {
    let variant = format_ident!("{}", format!("{verb:?}"));
    quote!(HttpVerb::#variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{format_generated_code, op, validate_generated_code};

    fn sample_map() -> NamespaceMap {
        NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/posts", &["Posts"], Some("listPosts")),
            op(HttpVerb::Post, "/v1/posts", &["Posts"], Some("createPost")),
            op(
                HttpVerb::Get,
                "/v1/connect/telegram",
                &["Connect"],
                Some("getTelegramConnectStatus"),
            ),
        ])
    }

    #[test]
    fn generates_valid_syntax() {
        let tokens = generate_operation_table(&sample_map());
        assert!(validate_generated_code(&tokens).is_ok());
    }

    #[test]
    fn emits_one_const_per_binding() {
        let code = format_generated_code(&generate_operation_table(&sample_map())).unwrap();

        assert!(code.contains("pub const POSTS_LIST_POSTS: Operation"));
        assert!(code.contains("pub const POSTS_CREATE_POST: Operation"));
        assert!(code.contains("pub const CONNECT_TELEGRAM_GET_TELEGRAM_CONNECT_STATUS: Operation"));
        assert!(code.contains(r#""connect.telegram""#));
        assert!(code.contains("HttpVerb::Post"));
    }

    #[test]
    fn table_lists_consts_in_emission_order() {
        let code = format_generated_code(&generate_operation_table(&sample_map())).unwrap();
        let table = code
            .split("pub const OPERATIONS")
            .nth(1)
            .expect("OPERATIONS table should be emitted");

        let list = table.find("POSTS_LIST_POSTS").unwrap();
        let create = table.find("POSTS_CREATE_POST").unwrap();
        let telegram = table.find("CONNECT_TELEGRAM_GET_TELEGRAM_CONNECT_STATUS").unwrap();
        assert!(list < create && create < telegram);
    }

    #[test]
    fn empty_map_emits_empty_table() {
        let code = format_generated_code(&generate_operation_table(&NamespaceMap::default())).unwrap();
        assert!(code.contains("pub const OPERATIONS: &[Operation] = &[];"));
    }
}
