//! Error types for model construction, synthesis and introspection.

/// Errors produced by the dialect engine.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// The model violates a structural rule (missing type parameter,
    /// duplicate name, dangling column reference, ...).
    #[error("Invalid model definition: {0}")]
    InvalidModelDefinition(String),

    /// No dialect is registered under the requested identifier.
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// Page number or page size below 1, or an offset that overflows.
    #[error("Invalid page request: page {page}, size {size}")]
    InvalidPage {
        /// Requested page number (1-based).
        page: i64,
        /// Requested page size.
        size: i64,
    },

    /// Reading the catalog failed or produced something the model
    /// cannot represent.
    #[error("Introspection failed: {message}")]
    Introspection {
        /// What was being read when the failure happened.
        message: String,
        /// Underlying driver or model error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed source emitter options.
    #[error("Invalid emitter configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while writing emitted source units.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DdlError {
    /// Shorthand for [`DdlError::InvalidModelDefinition`].
    pub(crate) fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModelDefinition(message.into())
    }

    /// Builds an [`DdlError::Introspection`] wrapping `source`.
    pub fn introspection<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Introspection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Builds an [`DdlError::Introspection`] without an underlying cause.
    pub(crate) fn introspection_msg(message: impl Into<String>) -> Self {
        Self::Introspection {
            message: message.into(),
            source: None,
        }
    }
}

/// Result type for dialect engine operations.
pub type Result<T> = std::result::Result<T, DdlError>;
