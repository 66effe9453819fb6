//! Error types for session operations.

use pp_schema::SchemaError;

/// Error writing session artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structure could not be serialized.
    #[error("cannot serialize structure: {0}")]
    Serialize(#[from] SchemaError),
}
