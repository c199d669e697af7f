//! Error types for garage_inventory

use thiserror::Error;

/// Unified error type for inventory service and export operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Service answered with a non-success status code
    #[error("HTTP error: {status} - {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for garage_inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
