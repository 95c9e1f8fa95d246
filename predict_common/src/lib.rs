//!
//! Common types and building blocks for the price predictor client.
//!
//! This crate aggregates:
//! - `error` — unified error type `PredictError` used across the workspace.
//! - `result` — handy `Result<T, PredictError>` alias.
//! - `net` — endpoint, header and environment constants.
//! - `config` — API key and endpoint configuration for the quote client.
//! - `http` — transport seam between the quote client and the network.
//! - `quote` — quote payloads and the prediction subject.
//! - `client` — the quote client talking to the quotes API.
//! - `predictor` — the weighted-trend price projection.
//! - `symbol` — reading and normalizing the requested symbol.
//! - `table` — ASCII table rendering of the results.
#![warn(missing_docs)]
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod predictor;
pub mod quote;
pub mod result;
pub mod symbol;
pub mod table;

pub use client::QuoteClient;
pub use config::ClientConfig;
pub use error::PredictError;
pub use quote::{PredictionSubject, Quote};
pub use result::Result;
