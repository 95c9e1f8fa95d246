//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PredictError`, so functions can simply return `Result<T>`.
use crate::error::PredictError;

/// Workspace-wide `Result` alias with `PredictError` as the default error.
pub type Result<T, E = PredictError> = std::result::Result<T, E>;
