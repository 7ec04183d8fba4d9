use std::time::Duration;

use log::debug;

use crate::clients::{
    ITunesClient,
    errors::{Error, Result},
};

/// Address the HTTP presentation server binds to by default
pub const DEFAULT_API_ADDR: &str = "127.0.0.1:3000";

/// Resolved configuration shared by the binaries
pub struct Config {
    /// Search client with the resolved query
    pub itunes: ITunesClient,
    /// Listen address for the HTTP server
    pub api_addr: String,
}

/// Collects explicit overrides; anything left unset falls back to the
/// environment and then to the built-in defaults.
#[derive(Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    term: Option<String>,
    entity: Option<String>,
    timeout_secs: Option<u64>,
    api_addr: Option<String>,
}

impl ConfigBuilder {
    /// Builder with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the search endpoint
    #[must_use]
    pub fn base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url.or(self.base_url);
        self
    }

    /// Override the search term
    #[must_use]
    pub fn term(mut self, term: Option<String>) -> Self {
        self.term = term.or(self.term);
        self
    }

    /// Override the media entity filter
    #[must_use]
    pub fn entity(mut self, entity: Option<String>) -> Self {
        self.entity = entity.or(self.entity);
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs.or(self.timeout_secs);
        self
    }

    /// Override the HTTP listen address
    #[must_use]
    pub fn api_addr(mut self, api_addr: Option<String>) -> Self {
        self.api_addr = api_addr.or(self.api_addr);
        self
    }

    /// Resolve against the process environment
    pub fn build(self) -> Result<Config> {
        self.build_with(|key| std::env::var(key).ok())
    }

    fn build_with(self, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let timeout_secs = match self.timeout_secs {
            Some(t) => Some(t),
            None => match env("ITUNES_SEARCH_TIMEOUT_SECS") {
                Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                    Error::ConfigurationError(format!(
                        "ITUNES_SEARCH_TIMEOUT_SECS must be a whole number of seconds: {e}"
                    ))
                })?),
                None => None,
            },
        };

        let mut builder = ITunesClient::builder().timeout(timeout_secs.map(Duration::from_secs));
        if let Some(base_url) = self.base_url.or_else(|| env("ITUNES_SEARCH_BASE_URL")) {
            builder = builder.base_url(base_url);
        }
        if let Some(term) = self.term.or_else(|| env("ITUNES_SEARCH_TERM")) {
            builder = builder.term(term);
        }
        if let Some(entity) = self.entity.or_else(|| env("ITUNES_SEARCH_ENTITY")) {
            builder = builder.entity(entity);
        }
        let itunes = builder.build()?;

        let api_addr = self
            .api_addr
            .or_else(|| env("HTTP_API_ADDR"))
            .unwrap_or_else(|| DEFAULT_API_ADDR.to_string());

        debug!(
            "Configured search for term {:?}, entity {:?}",
            itunes.term(),
            itunes.entity()
        );
        Ok(Config { itunes, api_addr })
    }
}
