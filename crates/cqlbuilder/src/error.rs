//! Error types for cqlbuilder

use thiserror::Error;

/// Result type alias for cqlbuilder operations
pub type CqlResult<T> = Result<T, CqlError>;

/// Error types for statement rendering and execution
#[derive(Debug, Error)]
pub enum CqlError {
    /// Table name not set before render
    #[error("Need table name")]
    EmptyTable,

    /// No columns/values accumulated where required
    #[error("Need at least one column/values pair")]
    EmptyColumn,

    /// No WHERE conditions where required
    #[error("Need at least one condition")]
    EmptyCondition,

    /// An empty-string column name was found during render
    #[error("Column name can't be empty")]
    InvalidColumnName,

    /// Error returned by the driver session, passed through untouched
    #[error("Session error: {0}")]
    Session(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },
}

impl CqlError {
    /// Wrap a driver error
    pub fn session<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Session(err.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error was produced while rendering a builder
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyTable | Self::EmptyColumn | Self::EmptyCondition | Self::InvalidColumnName
        )
    }
}
