//! Rust identifiers for generated items.
//!
//! | Item | Source | Example |
//! |------|--------|---------|
//! | namespace struct | namespace path | `connect.googleBusiness` -> `ConnectGoogleBusiness` |
//! | accessor | namespace name | `accountGroups` -> `account_groups` |
//! | method | method name | `createPost` -> `create_post` |
//! | operation const | path + method | `posts` + `createPost` -> `POSTS_CREATE_POST` |

use proc_macro2::{Ident, Span};
use quote::format_ident;

use crate::naming::{to_pascal_case, to_screaming_snake_case, to_snake_case};

/// Struct name for a namespace path.
pub fn struct_name(path: &[&str]) -> String {
    path.iter().map(|part| to_pascal_case(part)).collect()
}

/// Const name for a method within a namespace path.
pub fn const_name(path: &[&str], method: &str) -> String {
    path.iter()
        .copied()
        .chain(std::iter::once(method))
        .map(to_screaming_snake_case)
        .collect::<Vec<_>>()
        .join("_")
}

/// Namespace struct identifier.
pub fn struct_ident(path: &[&str]) -> Ident {
    rust_ident(&struct_name(path))
}

/// Accessor or method identifier.
pub fn member_ident(name: &str) -> Ident {
    rust_ident(&to_snake_case(name))
}

/// Operation const identifier.
pub fn const_ident(path: &[&str], method: &str) -> Ident {
    rust_ident(&const_name(path, method))
}

/// Builds an identifier, escaping keywords.
///
/// Keywords become raw identifiers (`type` -> `r#type`). The few keywords
/// that cannot be raw (`self`, `Self`, `super`, `crate`) get a trailing
/// underscore. Names starting with a digit get a leading underscore.
pub fn rust_ident(name: &str) -> Ident {
    let name = if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name.to_string()
    };

    if syn::parse_str::<syn::Ident>(&name).is_ok() {
        return format_ident!("{}", name);
    }

    match name.as_str() {
        "self" | "Self" | "super" | "crate" | "_" => format_ident!("{}_", name),
        _ => Ident::new_raw(&name, Span::call_site()),
    }
}
