//! Late API description library.
//!
//! This crate holds the types that sit between an OpenAPI document and the
//! generated client. The `late-gen` binary consumes an [`ApiDescription`];
//! the generated surface in the `late` crate refers to [`Operation`] and
//! [`HttpVerb`] at run time.
//!
//! ## Core Types
//!
//! - [`ApiDescription`] - A parsed description with operations in document order
//! - [`OperationDescriptor`] - One path + verb pair with tags and identifier
//! - [`HttpVerb`] - GET, POST, PUT, PATCH, DELETE
//! - [`Operation`] - `'static` record backing each generated method
//! - [`DefineError`] - Loading and parsing failures
//!
//! ## Examples
//!
//! ```
//! use late_define::ApiDescription;
//!
//! let description = ApiDescription::from_yaml_str(r#"
//! paths:
//!   /v1/profiles:
//!     get:
//!       tags: [Profiles]
//!       operationId: listProfiles
//! "#).unwrap();
//!
//! assert_eq!(description.operations().len(), 1);
//! assert_eq!(description.operations()[0].first_tag(), Some("Profiles"));
//! ```

pub mod description;
pub mod errors;
pub mod prelude;
pub mod types;

pub use description::{ApiDescription, ApiInfo, ServerEntry};
pub use errors::DefineError;
pub use types::{HttpVerb, Operation, OperationDescriptor, placeholder_name};
