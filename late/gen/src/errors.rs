//! Error types for the late generator.

use std::path::PathBuf;

use late_define::DefineError;
use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The API description file is absent.
    #[error("API description not found at '{}'", path.display())]
    DescriptionNotFound { path: PathBuf },

    /// Failed to load or parse the API description.
    #[error(transparent)]
    Define(DefineError),

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Two generated items would share one Rust identifier.
    ///
    /// Occurs when two bindings in the same namespace map to the same
    /// snake-case method name (e.g. `getPost` and `get_post`), or when a
    /// namespace accessor shadows an inherent method of the client.
    #[error("Naming collision in '{scope}': '{first}' and '{second}' both become `{ident}`")]
    NamingCollision {
        /// Namespace path (or `Late` for client accessors).
        scope: String,
        /// The earlier name.
        first: String,
        /// The later name.
        second: String,
        /// The Rust identifier both map to.
        ident: String,
    },
}

impl From<DefineError> for GeneratorError {
    fn from(err: DefineError) -> Self {
        match err {
            DefineError::NotFound { path } => Self::DescriptionNotFound { path },
            other => Self::Define(other),
        }
    }
}
