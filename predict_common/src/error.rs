//! Error types shared by the library and the client binary.
//!
//! The `PredictError` enum covers every way a run can fail: missing
//! configuration, transport problems, unexpected HTTP statuses, malformed
//! payloads, absent symbols, and input errors. None of them is recoverable;
//! the client reports the error and exits.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the client.
#[derive(Error, Debug)]
pub enum PredictError {
    /// Required configuration (API key, endpoint) is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a status other than 200.
    #[error("API returned error code: {status}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body is not valid JSON of the expected envelope shape.
    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested symbol or quote currency is absent from the response.
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input was closed before a symbol was read.
    #[error("Unexpected end of input")]
    EndOfInput,

    /// A table row does not have as many cells as the table has headers.
    #[error("Table row has {actual} cells, expected {expected}")]
    TableShape {
        /// Number of headers.
        expected: usize,
        /// Number of cells in the rejected row.
        actual: usize,
    },
}
