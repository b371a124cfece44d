//! Late code generator library.
//!
//! This crate turns the Late OpenAPI description into the namespaced method
//! surface of the `late` client crate. The generated code includes:
//!
//! - One `Operation` const per method and an `OPERATIONS` table
//! - Accessors on the client, one per namespace (`client.posts()`)
//! - A small struct per namespace whose async methods call the shared executor
//! - Nested namespaces for connect providers (`client.connect().telegram()`)
//!
//! ## Modules
//!
//! - [`grouping`] - Tag to namespace resolution and method binding
//! - [`naming`] - Method name synthesis and case conversion
//! - [`connect`] - Provider detection for connect paths
//! - [`parser`] - Path template helpers
//! - [`validation`] - Identifier collision checks before emission
//! - [`codegen`] - Token generation for consts, accessors and namespaces
//! - [`output`] - Final assembly, validation, and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use late_gen::output::generate_from_file;
//!
//! let surface = generate_from_file(
//!     Path::new("late/openapi.yaml"),
//!     Path::new("late/src/generated.rs"),
//!     true,
//! )
//! .unwrap();
//! println!("{} methods", surface.method_count());
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! pub const POSTS_CREATE_POST: Operation =
//!     Operation::new("posts", "createPost", HttpVerb::Post, "/v1/posts");
//! pub const OPERATIONS: &[Operation] = &[POSTS_CREATE_POST, ...];
//!
//! impl Late {
//!     pub fn posts(&self) -> Posts<'_> { ... }
//! }
//!
//! pub struct Posts<'a> { client: &'a Late }
//!
//! impl Posts<'_> {
//!     pub async fn create_post<T: DeserializeOwned>(&self, args: RequestArgs)
//!         -> Result<T, LateError>;
//! }
//! ```

pub mod codegen;
pub mod connect;
pub mod errors;
pub mod grouping;
pub mod naming;
pub mod output;
pub mod parser;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::GeneratorError;
pub use grouping::{MethodBinding, Namespace, NamespaceMap};
pub use output::{GeneratedSurface, NamespaceSummary, generate, generate_and_write};
