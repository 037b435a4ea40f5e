//! Error types for view inference.
//!
//! The inference functions themselves are total and never fail. Errors only
//! arise at the edges: parsing view-type names, validating configuration,
//! and decoding tool arguments or payload files.

/// Main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// A view-type name that is not part of the known registry
    #[error("Unknown view type: '{name}'")]
    UnknownViewType { name: String },

    /// Inference configuration rejected by validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Tool or command arguments that cannot be interpreted
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while reading payloads
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// MCP session setup or shutdown failures
    #[error("Transport error: {message}")]
    Transport { message: String },
}

/// Result type for fallible operations in this crate.
pub type InferenceResult<T> = Result<T, InferenceError>;

impl InferenceError {
    /// Create an unknown view type error
    pub fn unknown_view_type(name: impl Into<String>) -> Self {
        Self::UnknownViewType { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
