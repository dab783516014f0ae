//! Error types for the SQLite driver.

use oxide_dialects_core::DdlError;

/// Errors raised while reading a SQLite catalog or executing DDL.
#[derive(Debug, thiserror::Error)]
pub enum SqliteError {
    /// Database error outside statement execution (catalog reads).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Model, synthesis or introspection error from the core crate.
    #[error(transparent)]
    Ddl(#[from] DdlError),

    /// A DDL statement failed under [`FailurePolicy::Abort`](crate::FailurePolicy::Abort).
    #[error("Statement failed: {sql}: {source}")]
    Statement {
        /// The failing statement.
        sql: String,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },

    /// The catalog holds something the reader cannot describe.
    #[error("Unsupported catalog entry: {0}")]
    Unsupported(String),
}

/// Result type for SQLite driver operations.
pub type Result<T> = std::result::Result<T, SqliteError>;
