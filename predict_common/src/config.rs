//! Quote client configuration.
//!
//! The API key is read once, at startup, and handed to the client explicitly so
//! the client itself never touches the process environment.
use crate::net::{API_KEY_ENV, QUOTES_ENDPOINT};

/// Settings used by [`crate::QuoteClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent with every request. `None` when the variable is unset or empty.
    pub api_key: Option<String>,
    /// Base URL of the quotes endpoint, without query parameters.
    pub endpoint: String,
}

impl ClientConfig {
    /// Creates a config with the given key and the default endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: String::from(QUOTES_ENDPOINT),
        }
    }

    /// Builds the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self::new(api_key)
    }

    /// Replaces the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reads_api_key_variable() {
        let config = ClientConfig::from_lookup(|name| {
            (name == API_KEY_ENV).then(|| String::from("secret"))
        });

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, QUOTES_ENDPOINT);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = ClientConfig::from_lookup(|_| Some(String::from("   ")));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn unset_api_key_is_none() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn endpoint_can_be_overridden() {
        let config = ClientConfig::new(None).with_endpoint("http://localhost:9000/quotes");
        assert_eq!(config.endpoint, "http://localhost:9000/quotes");
    }
}
