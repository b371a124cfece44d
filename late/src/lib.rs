//! Client for the Late social media publishing API.
//!
//! Every API operation is reachable as an async method grouped by
//! namespace. The namespace surface in [`generated`] is produced by
//! `late-gen` from `openapi.yaml`; the rest of the crate is the runtime it
//! calls into.
//!
//! ## Features
//!
//! - **Namespaced methods**: `client.posts().create_post(..)`,
//!   `client.connect().telegram().get_telegram_connect_status(..)`
//! - **Bearer authentication**: from [`ClientOptions`] or `LATE_API_KEY`
//! - **Interceptors**: default headers, auth and error normalization run on
//!   every call through one [`Transport`](client::Transport)
//! - **Classified errors**: rate limits, validation failures and other API
//!   errors map to distinct [`LateError`] variants
//!
//! ## Example
//!
//! ```rust,no_run
//! use late::prelude::*;
//! use serde_json::{Value, json};
//!
//! # async fn run() -> Result<(), LateError> {
//! let client = Late::from_env()?;
//!
//! let post: Value = client
//!     .posts()
//!     .create_post(RequestArgs::new().json(json!({
//!         "content": "Hello from Rust",
//!         "platforms": [{ "platform": "bluesky", "accountId": "acc_1" }]
//!     })))
//!     .await?;
//! println!("{post}");
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod client;
pub mod error;
pub mod generated;
pub mod prelude;

pub use args::RequestArgs;
pub use client::{ClientOptions, Late};
pub use error::{ApiError, LateError, RateLimitError, ResetHint, ValidationError};
pub use late_define::{HttpVerb, Operation};
