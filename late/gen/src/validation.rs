//! Pre-emission checks on a namespace map.
//!
//! Method-name collisions between operations are resolved during grouping
//! (last write wins). What remains are collisions that only appear once
//! names become Rust identifiers, which would make the emitted code fail to
//! compile:
//!
//! - two names in one namespace that snake-case to the same identifier
//! - a method that shares its identifier with a nested namespace accessor
//! - a namespace accessor that shadows an inherent method of the client
//! - a namespace struct that shadows a type the generated module imports
//! - two operation consts with the same screaming-snake name

use std::collections::HashMap;

use crate::codegen::idents::{const_name, struct_name};
use crate::errors::GeneratorError;
use crate::grouping::{Namespace, NamespaceMap};
use crate::naming::to_snake_case;

/// Inherent methods of the client that accessors must not shadow.
pub const RESERVED_CLIENT_METHODS: &[&str] = &[
    "new",
    "from_env",
    "execute",
    "base_url",
    "timeout",
    "operations",
    "transport",
];

/// Type names the generated module brings into scope.
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "Late",
    "LateError",
    "RequestArgs",
    "Operation",
    "HttpVerb",
    "DeserializeOwned",
    "Result",
];

/// Validates that every namespace, method and const maps to a unique identifier.
///
/// ## Errors
///
/// Returns `GeneratorError::NamingCollision` on the first clash found, and
/// `GeneratorError::CodeGenError` for names with no identifier characters.
pub fn validate_namespace_map(map: &NamespaceMap) -> Result<(), GeneratorError> {
    let mut accessors: HashMap<String, String> = RESERVED_CLIENT_METHODS
        .iter()
        .map(|name| ((*name).to_string(), format!("Late::{name}")))
        .collect();
    let mut types: HashMap<String, String> = RESERVED_TYPE_NAMES
        .iter()
        .map(|name| ((*name).to_string(), (*name).to_string()))
        .collect();
    let mut consts: HashMap<String, String> = HashMap::new();

    for namespace in map.iter() {
        claim(&mut accessors, "Late", namespace.name(), to_snake_case(namespace.name()))?;
        validate_namespace(namespace, &[namespace.name()], &mut types, &mut consts)?;
    }

    Ok(())
}

fn validate_namespace(
    namespace: &Namespace,
    path: &[&str],
    types: &mut HashMap<String, String>,
    consts: &mut HashMap<String, String>,
) -> Result<(), GeneratorError> {
    let scope = path.join(".");
    claim(types, "generated module", &scope, struct_name(path))?;

    let mut members: HashMap<String, String> = HashMap::new();
    for binding in namespace.methods() {
        claim(&mut members, &scope, &binding.name, to_snake_case(&binding.name))?;
        claim(
            consts,
            "generated module",
            &format!("{scope}.{}", binding.name),
            const_name(path, &binding.name),
        )?;
    }

    for child in namespace.children() {
        claim(&mut members, &scope, child.name(), to_snake_case(child.name()))?;
        let mut child_path = path.to_vec();
        child_path.push(child.name());
        validate_namespace(child, &child_path, types, consts)?;
    }

    Ok(())
}

fn claim(
    seen: &mut HashMap<String, String>,
    scope: &str,
    name: &str,
    ident: String,
) -> Result<(), GeneratorError> {
    if ident.is_empty() {
        return Err(GeneratorError::CodeGenError(format!(
            "'{name}' in '{scope}' does not yield a Rust identifier"
        )));
    }

    if let Some(first) = seen.get(&ident) {
        return Err(GeneratorError::NamingCollision {
            scope: scope.to_string(),
            first: first.clone(),
            second: name.to_string(),
            ident,
        });
    }

    seen.insert(ident, name.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{op, sample_description};
    use late_define::HttpVerb;

    #[test]
    fn sample_description_is_valid() {
        let map = NamespaceMap::build(&sample_description());
        assert!(validate_namespace_map(&map).is_ok());
    }

    #[test]
    fn snake_case_duplicates_are_rejected() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/posts/{id}", &["Posts"], Some("getPost")),
            op(HttpVerb::Get, "/v1/posts/{id}/raw", &["Posts"], Some("get_post")),
        ]);

        match validate_namespace_map(&map) {
            Err(GeneratorError::NamingCollision {
                scope,
                first,
                second,
                ident,
            }) => {
                assert_eq!(scope, "posts");
                assert_eq!(first, "getPost");
                assert_eq!(second, "get_post");
                assert_eq!(ident, "get_post");
            }
            other => panic!("Expected naming collision, got {other:?}"),
        }
    }

    #[test]
    fn accessor_shadowing_client_method_is_rejected() {
        let map = NamespaceMap::from_operations(&[op(
            HttpVerb::Get,
            "/v1/timeouts",
            &["Timeout"],
            Some("listTimeouts"),
        )]);

        let err = validate_namespace_map(&map).unwrap_err();
        assert!(matches!(err, GeneratorError::NamingCollision { ref scope, .. } if scope == "Late"));
    }

    #[test]
    fn struct_shadowing_imported_type_is_rejected() {
        let map = NamespaceMap::from_operations(&[op(
            HttpVerb::Get,
            "/v1/results",
            &["Result"],
            Some("listResults"),
        )]);

        assert!(matches!(
            validate_namespace_map(&map),
            Err(GeneratorError::NamingCollision { .. })
        ));
    }

    #[test]
    fn method_clashing_with_child_accessor_is_rejected() {
        let map = NamespaceMap::from_operations(&[
            op(HttpVerb::Get, "/v1/connect/{x}", &["Connect"], Some("telegram")),
            op(HttpVerb::Get, "/v1/connect/telegram", &["Connect"], Some("getStatus")),
        ]);

        assert!(matches!(
            validate_namespace_map(&map),
            Err(GeneratorError::NamingCollision { .. })
        ));
    }

    #[test]
    fn names_without_identifier_characters_are_rejected() {
        let map = NamespaceMap::from_operations(&[op(
            HttpVerb::Get,
            "/v1/posts",
            &["Posts"],
            Some("!!!"),
        )]);

        assert!(matches!(
            validate_namespace_map(&map),
            Err(GeneratorError::CodeGenError(_))
        ));
    }
}
