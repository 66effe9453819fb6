//! Schema error types.

/// Error produced while parsing or validating a website structure.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document is not JSON or does not have the structure shape.
    #[error("invalid structure JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but violates a structural rule.
    #[error("invalid structure: {field} {message}")]
    Invalid {
        /// Offending field path (e.g., "title", "sections").
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl SchemaError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
