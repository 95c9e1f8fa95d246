//! Networking constants shared by the quote client and the binary.

/// Quotes endpoint queried for the latest price of a symbol.
pub const QUOTES_ENDPOINT: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CMC_API_KEY";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";
/// Quote currency the predictor works in.
pub const QUOTE_CURRENCY: &str = "USD";
/// Value sent in the `Accept` header.
pub const ACCEPT_JSON: &str = "application/json";
/// User agent reported by the production transport.
pub const USER_AGENT: &str = concat!("predict_client/", env!("CARGO_PKG_VERSION"));
