//! Error types for structure acquisition.

use pp_schema::SchemaError;

/// Error from a generative model call.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Server returned an error status.
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// No model is reachable.
    #[error("model unavailable: {0}")]
    Unavailable(String),

    /// Model replied without any text.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Response envelope could not be decoded.
    #[error("invalid response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reason an acquisition fell back to the fixed structure.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Model text was not a valid structure document.
    #[error("model reply rejected: {0}")]
    Schema(#[from] SchemaError),
}
