//! Convenient re-exports for working with API descriptions.
//!
//! ```
//! use late_define::prelude::*;
//!
//! let op = Operation::new("media", "getMediaPresignedUrl", HttpVerb::Post, "/v1/media/presign");
//! assert_eq!(op.verb.as_str(), "POST");
//! ```

pub use crate::description::{ApiDescription, ApiInfo, ServerEntry};
pub use crate::errors::DefineError;
pub use crate::types::{HttpVerb, Operation, OperationDescriptor, placeholder_name};
