//! Quote payloads and the prediction subject.
//!
//! The quotes API answers with an envelope keyed by symbol, then by quote
//! currency:
//!
//! ```json
//! {"data": {"BTC": {"quote": {"USD": {"price": 50000.0, "percent_change_24h": 5.0,
//!   "percent_change_7d": 10.0, "last_updated": "2024-01-01T00:00:00.000Z"}}}}}
//! ```
//!
//! Both map levels are modelled explicitly, so a missing symbol or currency is
//! a lookup miss rather than a deserialization failure.
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price and percent-change snapshot for one symbol in one quote currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Last price in the quote currency.
    pub price: f64,
    /// Price change over the last 24 hours, in percent.
    pub percent_change_24h: f64,
    /// Price change over the last 7 days, in percent.
    pub percent_change_7d: f64,
    /// Time of the last update, as sent by the API.
    pub last_updated: String,
}

impl Quote {
    /// Parses `last_updated` as an RFC 3339 timestamp.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// Top-level response of the quotes endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEnvelope {
    /// Entries keyed by symbol.
    pub data: HashMap<String, CryptoEntry>,
}

/// Per-symbol entry of the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptoEntry {
    /// Quotes keyed by quote currency code (e.g. `USD`).
    pub quote: HashMap<String, Quote>,
}

/// Symbol being predicted together with its fetched figures.
///
/// Created with only the symbol set; [`PredictionSubject::apply_quote`] fills
/// every numeric field at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionSubject {
    /// Normalized symbol, e.g. `BTC`.
    pub symbol: String,
    /// Current price in USD.
    pub current_price: f64,
    /// 24h change in percent.
    pub percent_change_24h: f64,
    /// 7d change in percent.
    pub percent_change_7d: f64,
}

impl PredictionSubject {
    /// Creates a subject with no figures yet.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Copies the price and both percent changes from `quote`.
    pub fn apply_quote(&mut self, quote: &Quote) {
        self.current_price = quote.price;
        self.percent_change_24h = quote.percent_change_24h;
        self.percent_change_7d = quote.percent_change_7d;
    }
}
