//! Tool error types.

use domain::OrderError;
use thiserror::Error;

/// Errors that stop a command from producing a report.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// The order document could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The order document is not a valid order.
    #[error("Invalid order document: {0}")]
    Json(#[from] serde_json::Error),

    /// The order rejected the requested transition.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}
