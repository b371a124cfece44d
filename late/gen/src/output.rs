//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all
//! generated pieces into one Rust file, validating the output, formatting it,
//! and writing it to disk atomically.
//!
//! ## Output Structure
//!
//! The generator produces a single module inside the `late` crate:
//! ```text
//! late/src/
//! ├── lib.rs         # declares `mod generated`
//! └── generated.rs   # operation table, accessors and namespace structs
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: Namespace names are checked for identifier clashes, and
//!   the generated code is parsed with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes
//! - **Determinism**: The same description always yields byte-identical output

use std::fs;
use std::path::Path;

use late_define::ApiDescription;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::codegen::{
    ModuleDocBuilder, generate_client_accessors, generate_namespace, generate_operation_table,
};
use crate::errors::GeneratorError;
use crate::grouping::NamespaceMap;
use crate::validation::validate_namespace_map;

/// Notice prepended to every generated file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by late-gen. Do not edit manually.";

/// Method count for one namespace, keyed by its dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSummary {
    /// Dotted namespace path (e.g. `connect.telegram`).
    pub path: String,
    /// Methods directly on the namespace.
    pub methods: usize,
}

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedSurface {
    /// The formatted source, notice included.
    pub code: String,
    /// Per-namespace method counts in emission order.
    pub summary: Vec<NamespaceSummary>,
}

impl GeneratedSurface {
    /// Total number of generated methods.
    pub fn method_count(&self) -> usize {
        self.summary.iter().map(|entry| entry.methods).sum()
    }
}

/// Assembles the generated module.
///
/// The module contains, in order:
/// - Module documentation
/// - Imports of the runtime types the surface refers to
/// - One operation const per method, then the `OPERATIONS` table
/// - Namespace accessors on the client
/// - Namespace structs with their methods, nested namespaces after their parent
pub fn assemble_surface(description: &ApiDescription, map: &NamespaceMap) -> TokenStream {
    let module_docs = ModuleDocBuilder::new(description, map).build();
    let operation_table = generate_operation_table(map);
    let accessors = generate_client_accessors(map);
    let namespaces = map
        .iter()
        .map(|namespace| generate_namespace(namespace, &[namespace.name()]));

    quote! {
        #module_docs

        use late_define::{HttpVerb, Operation};
        use serde::de::DeserializeOwned;

        use crate::args::RequestArgs;
        use crate::client::Late;
        use crate::error::LateError;

        #operation_table

        #accessors

        #(#namespaces)*
    }
}

/// Validates generated code by parsing it with syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the tokens do not form a valid
/// Rust file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {e}")))
}

/// Formats a parsed file with prettyplease, prepending [`GENERATED_NOTICE`].
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_NOTICE}\n\n{formatted}")
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created when missing.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Per-namespace method counts in emission order.
pub fn summarize(map: &NamespaceMap) -> Vec<NamespaceSummary> {
    map.walk()
        .into_iter()
        .map(|(path, namespace)| NamespaceSummary {
            path,
            methods: namespace.len(),
        })
        .collect()
}

/// Generates the formatted surface for a description without writing it.
///
/// ## Errors
///
/// - `GeneratorError::NamingCollision` if two names map to one identifier
/// - `GeneratorError::CodeGenError` if the assembled code does not parse
pub fn generate(description: &ApiDescription) -> Result<GeneratedSurface, GeneratorError> {
    let map = NamespaceMap::build(description);
    debug!(
        namespaces = map.len(),
        methods = map.method_count(),
        "Grouped operations"
    );

    validate_namespace_map(&map)?;

    let tokens = assemble_surface(description, &map);
    let file = validate_code(&tokens)?;

    Ok(GeneratedSurface {
        code: format_code(&file),
        summary: summarize(&map),
    })
}

/// Generates the surface and writes it to `output_path`.
///
/// With `dry_run` set, the code is printed to stdout instead.
///
/// ## Errors
///
/// Everything [`generate`] returns, plus `GeneratorError::WriteError` if the
/// file cannot be written.
pub fn generate_and_write(
    description: &ApiDescription,
    output_path: &Path,
    dry_run: bool,
) -> Result<GeneratedSurface, GeneratorError> {
    let surface = generate(description)?;

    if dry_run {
        println!("=== {} ===\n{}\n", output_path.display(), surface.code);
    } else {
        write_atomic(output_path, &surface.code)?;
        info!(
            path = %output_path.display(),
            methods = surface.method_count(),
            "Wrote generated surface"
        );
    }

    Ok(surface)
}

/// Loads a description file and generates from it.
///
/// ## Errors
///
/// `GeneratorError::DescriptionNotFound` when the file is missing, a
/// `GeneratorError::Define` error when it cannot be parsed, and everything
/// [`generate_and_write`] returns.
pub fn generate_from_file(
    description_path: &Path,
    output_path: &Path,
    dry_run: bool,
) -> Result<GeneratedSurface, GeneratorError> {
    let description = ApiDescription::load(description_path)?;
    info!(
        path = %description_path.display(),
        operations = description.operations().len(),
        "Loaded API description"
    );
    generate_and_write(&description, output_path, dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{op, sample_description};
    use late_define::HttpVerb;
    use tempfile::TempDir;

    #[test]
    fn assembled_surface_is_valid_rust() {
        let description = sample_description();
        let map = NamespaceMap::build(&description);
        assert!(validate_code(&assemble_surface(&description, &map)).is_ok());
    }

    #[test]
    fn validate_code_rejects_invalid_code() {
        let invalid_tokens = quote! {
            let x =
        };

        match validate_code(&invalid_tokens) {
            Err(GeneratorError::CodeGenError(_)) => {}
            Err(other) => panic!("Expected CodeGenError, got {other:?}"),
            Ok(_) => panic!("Expected CodeGenError, got a parsed file"),
        }
    }

    #[test]
    fn format_code_prepends_notice() {
        let file = validate_code(&quote! { pub struct Marker; }).unwrap();
        let code = format_code(&file);
        assert!(code.starts_with(GENERATED_NOTICE));
        assert!(code.contains("pub struct Marker;"));
    }

    #[test]
    fn generate_includes_imports_and_table() {
        let surface = generate(&sample_description()).unwrap();

        assert!(surface.code.contains("use late_define::{HttpVerb, Operation};"));
        assert!(surface.code.contains("use crate::client::Late;"));
        assert!(surface.code.contains("pub const OPERATIONS: &[Operation]"));
        assert!(surface.code.contains("pub fn posts(&self) -> Posts<'_>"));
    }

    #[test]
    fn generate_is_deterministic() {
        let first = generate(&sample_description()).unwrap();
        let second = generate(&sample_description()).unwrap();
        assert_eq!(first.code, second.code);
    }

    #[test]
    fn generate_rejects_identifier_collisions() {
        let description = ApiDescription::from_operations(vec![
            op(HttpVerb::Get, "/v1/posts/{id}", &["Posts"], Some("getPost")),
            op(HttpVerb::Get, "/v1/posts/{id}/raw", &["Posts"], Some("get_post")),
        ]);

        assert!(matches!(
            generate(&description),
            Err(GeneratorError::NamingCollision { .. })
        ));
    }

    #[test]
    fn summary_counts_methods_per_namespace() {
        let surface = generate(&sample_description()).unwrap();
        let posts = surface
            .summary
            .iter()
            .find(|entry| entry.path == "posts")
            .unwrap();
        assert_eq!(posts.methods, 2);
        assert_eq!(
            surface.method_count(),
            sample_description().operations().len()
        );
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("generated.rs");

        write_atomic(&path, "// content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "// content");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.rs");

        generate_and_write(&sample_description(), &path, true).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn missing_description_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yaml");
        let output = temp.path().join("generated.rs");

        match generate_from_file(&missing, &output, false) {
            Err(GeneratorError::DescriptionNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected DescriptionNotFound, got {other:?}"),
        }
        assert!(!output.exists());
    }
}
