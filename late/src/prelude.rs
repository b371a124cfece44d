//! Common imports for calling the Late API.
//!
//! ```
//! use late::prelude::*;
//!
//! let args = RequestArgs::new().path_param("profileId", "prof_1");
//! assert_eq!(args.path_params().len(), 1);
//! ```

pub use crate::args::RequestArgs;
pub use crate::client::{ClientOptions, Late};
pub use crate::error::{ApiError, LateError, RateLimitError, ResetHint, ValidationError};
pub use late_define::{HttpVerb, Operation};
