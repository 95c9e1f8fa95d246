//! Quote client for the latest-quotes endpoint.
//!
//! One call fetches the USD quote of one symbol. The client checks for the API
//! key before touching the transport, maps transport failures, non-200
//! statuses, malformed bodies and missing keys to distinct `PredictError`
//! variants, and never retries.
use std::sync::Arc;

use log::debug;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::PredictError;
use crate::http::{HttpClient, HttpRequest};
use crate::net::{ACCEPT_JSON, API_KEY_HEADER, QUOTE_CURRENCY};
use crate::quote::{Quote, QuoteEnvelope};
use crate::result::Result;

/// Fetches quotes through an [`HttpClient`] transport.
pub struct QuoteClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
}

impl QuoteClient {
    /// Creates a client from its configuration and transport.
    pub fn new(config: ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Fetches the USD quote of `symbol`.
    pub fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        let request = self.build_request(symbol)?;
        debug!("GET {}", request.url);

        let response = self
            .http
            .execute(request)
            .map_err(|e| PredictError::Network(e.message().to_string()))?;

        if response.status != 200 {
            return Err(PredictError::Api {
                status: response.status,
            });
        }

        let envelope: QuoteEnvelope = serde_json::from_str(&response.body)?;
        let quote = extract_quote(envelope, symbol)?;
        debug!(
            "Fetched {} quote: price={} 24h={}% 7d={}%",
            symbol, quote.price, quote.percent_change_24h, quote.percent_change_7d
        );
        if let Some(updated) = quote.last_updated_at() {
            debug!("Quote for {} last updated at {}", symbol, updated);
        }
        Ok(quote)
    }

    fn build_request(&self, symbol: &str) -> Result<HttpRequest> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            PredictError::Configuration(String::from("CMC_API_KEY environment variable is not set"))
        })?;

        let url = Url::parse_with_params(&self.config.endpoint, &[("symbol", symbol)]).map_err(
            |e| {
                PredictError::Configuration(format!(
                    "invalid endpoint '{}': {}",
                    self.config.endpoint, e
                ))
            },
        )?;

        Ok(HttpRequest::get(url.as_str())
            .with_header(API_KEY_HEADER, api_key)
            .with_header("Accept", ACCEPT_JSON))
    }
}

fn extract_quote(mut envelope: QuoteEnvelope, symbol: &str) -> Result<Quote> {
    let mut entry = envelope
        .data
        .remove(symbol)
        .ok_or_else(|| PredictError::NotFound(format!("no data found for '{}'", symbol)))?;

    entry.quote.remove(QUOTE_CURRENCY).ok_or_else(|| {
        PredictError::NotFound(format!(
            "no {} price found for '{}'",
            QUOTE_CURRENCY, symbol
        ))
    })
}
