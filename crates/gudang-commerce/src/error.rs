//! Commerce error types.

use thiserror::Error;

use crate::detail::SelectionError;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A detail-page selection was rejected.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Unknown currency code in configuration.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A stored record could not be interpreted.
    #[error("Invalid record {id}: {message}")]
    InvalidRecord { id: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
