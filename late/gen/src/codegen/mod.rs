//! Code generation for the namespace surface.
//!
//! ## Submodules
//!
//! - [`idents`] - Rust identifiers for structs, methods and consts
//! - [`module_docs`] - Module-level documentation for the generated file
//! - [`namespace`] - Namespace structs, their methods and the client accessors
//! - [`operations`] - Operation consts and the `OPERATIONS` table
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod idents;
pub mod module_docs;
pub mod namespace;
pub mod operations;

pub use module_docs::ModuleDocBuilder;
pub use namespace::{generate_client_accessors, generate_namespace};
pub use operations::generate_operation_table;

use crate::grouping::{Namespace, NamespaceMap};

/// Every namespace with its path segments, parents before their children.
pub(crate) fn namespace_paths(map: &NamespaceMap) -> Vec<(Vec<&str>, &Namespace)> {
    let mut out = Vec::new();
    for namespace in map.iter() {
        push_paths(namespace, Vec::new(), &mut out);
    }
    out
}

fn push_paths<'a>(
    namespace: &'a Namespace,
    mut path: Vec<&'a str>,
    out: &mut Vec<(Vec<&'a str>, &'a Namespace)>,
) {
    path.push(namespace.name());
    out.push((path.clone(), namespace));
    for child in namespace.children() {
        push_paths(child, path.clone(), out);
    }
}
