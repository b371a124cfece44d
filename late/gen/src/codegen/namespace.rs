//! Namespace struct generation.
//!
//! Each namespace becomes a small `Copy` struct borrowing the client. Its
//! methods forward to `Late::execute` with the matching operation const;
//! nested namespaces are reached through accessor methods on the parent.

use proc_macro2::TokenStream;
use quote::quote;

use super::idents::{const_ident, member_ident, struct_ident};
use crate::grouping::{MethodBinding, Namespace, NamespaceMap};

/// Generates the accessor methods on the client, one per top-level namespace.
///
/// ## Examples
///
/// ```ignore
/// impl Late {
///     /// Operations in the `posts` namespace.
///     pub fn posts(&self) -> Posts<'_> {
///         Posts { client: self }
///     }
/// }
/// ```
pub fn generate_client_accessors(map: &NamespaceMap) -> TokenStream {
    let accessors = map.iter().map(|namespace| {
        let fn_ident = member_ident(namespace.name());
        let struct_ident = struct_ident(&[namespace.name()]);
        let doc = format!(" Operations in the `{}` namespace.", namespace.name());

        quote! {
            #[doc = #doc]
            pub fn #fn_ident(&self) -> #struct_ident<'_> {
                #struct_ident { client: self }
            }
        }
    });

    quote! {
        impl Late {
            #(#accessors)*
        }
    }
}

/// Generates the struct, methods and nested namespaces for one namespace.
pub fn generate_namespace(namespace: &Namespace, path: &[&str]) -> TokenStream {
    let ns_ident = struct_ident(path);
    let doc = format!(" Operations in the `{}` namespace.", path.join("."));

    let methods: Vec<_> = namespace
        .methods()
        .map(|binding| generate_method(binding, path))
        .collect();

    let child_paths: Vec<Vec<&str>> = namespace
        .children()
        .map(|child| {
            let mut child_path = path.to_vec();
            child_path.push(child.name());
            child_path
        })
        .collect();

    let child_accessors = namespace.children().zip(&child_paths).map(|(child, child_path)| {
        let fn_ident = member_ident(child.name());
        let child_struct = struct_ident(child_path);
        let doc = format!(" Operations in the `{}` namespace.", child_path.join("."));

        quote! {
            #[doc = #doc]
            pub fn #fn_ident(&self) -> #child_struct<'a> {
                #child_struct { client: self.client }
            }
        }
    });

    let children = namespace
        .children()
        .zip(&child_paths)
        .map(|(child, child_path)| generate_namespace(child, child_path));

    let impl_header = if child_paths.is_empty() {
        quote!(impl #ns_ident<'_>)
    } else {
        quote!(impl<'a> #ns_ident<'a>)
    };

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy)]
        pub struct #ns_ident<'a> {
            client: &'a Late,
        }

        #impl_header {
            #(#methods)*

            #(#child_accessors)*
        }

        #(#children)*
    }
}

fn generate_method(binding: &MethodBinding, path: &[&str]) -> TokenStream {
    let fn_ident = member_ident(&binding.name);
    let const_ident = const_ident(path, &binding.name);
    let route_doc = format!(" `{} {}`", binding.verb(), binding.path());

    let docs = match binding.summary() {
        Some(summary) => {
            let summary_doc = format!(" {summary}");
            quote! {
                #[doc = #summary_doc]
                #[doc = ""]
                #[doc = #route_doc]
            }
        }
        None => quote! {
            #[doc = #route_doc]
        },
    };

    quote! {
        #docs
        pub async fn #fn_ident<T: DeserializeOwned>(
            &self,
            args: RequestArgs,
        ) -> Result<T, LateError> {
            self.client.execute(&#const_ident, args).await
        }
    }
}
