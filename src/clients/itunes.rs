use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::clients::{
    entities::SearchResponse,
    errors::{Error, Result},
};

/// Public iTunes search endpoint
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com/search";
/// Search term used when nothing else is configured
pub const DEFAULT_TERM: &str = "eduardo costa";
/// Media entity filter used when nothing else is configured
pub const DEFAULT_ENTITY: &str = "song";

/// Client for the iTunes search endpoint, bound to one query
#[derive(Debug, Clone)]
pub struct ITunesClient {
    client: Client,
    base_url: String,
    term: String,
    entity: String,
    timeout: Option<Duration>,
}

impl ITunesClient {
    /// Start from the public endpoint and the fixed query
    pub fn builder() -> ITunesClientBuilder {
        ITunesClientBuilder::default()
    }

    /// Client pointed at the public endpoint with the fixed query
    pub fn try_default() -> Result<Self> {
        Self::builder().build()
    }

    /// Configured search term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Configured media entity filter
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Build the request target. Spaces in the term are form-encoded as '+'
    pub fn search_url(&self) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[("term", self.term.as_str()), ("entity", self.entity.as_str())],
        )?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::UnsupportedScheme(other.to_string())),
        }
    }

    /// Send one GET and decode the envelope. No retry.
    ///
    /// The status code is not inspected: whatever body comes back goes to the
    /// decoder, so an error page surfaces as a decode failure.
    pub async fn search(&self) -> Result<SearchResponse> {
        let url = self.search_url()?;
        debug!("Requesting {url}");

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        debug!("Search endpoint answered with status {}", response.status());

        let body = response.bytes().await?;
        let decoded: SearchResponse = serde_json::from_slice(&body)?;
        debug!("Decoded {} search results", decoded.results.len());
        Ok(decoded)
    }
}

/// Settings for an [`ITunesClient`]
pub struct ITunesClientBuilder {
    client: Option<Client>,
    base_url: String,
    term: String,
    entity: String,
    timeout: Option<Duration>,
}

impl Default for ITunesClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            term: DEFAULT_TERM.to_string(),
            entity: DEFAULT_ENTITY.to_string(),
            timeout: None,
        }
    }
}

impl ITunesClientBuilder {
    /// Reuse an existing HTTP client
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Search endpoint, without query string
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search term
    #[must_use]
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Media entity filter
    #[must_use]
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = entity.into();
        self
    }

    /// No timeout is applied unless one is set here
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create the client.
    ///
    /// The base URL is only validated when a request is built, so a bad value
    /// shows up as a malformed request from the fetch instead of here.
    pub fn build(self) -> Result<ITunesClient> {
        let client = match self.client {
            Some(c) => c,
            None => Client::builder().build()?,
        };
        Ok(ITunesClient {
            client,
            base_url: self.base_url,
            term: self.term,
            entity: self.entity,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ErrorKind;

    #[test]
    fn default_url_encodes_fixed_query() {
        let client = ITunesClient::try_default().unwrap();
        let url = client.search_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://itunes.apple.com/search?term=eduardo+costa&entity=song"
        );
    }

    #[test]
    fn custom_query_is_used() {
        let client = ITunesClient::builder()
            .base_url("http://localhost:8080/search")
            .term("taylor swift")
            .entity("album")
            .build()
            .unwrap();
        let url = client.search_url().unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("term".to_string(), "taylor swift".to_string()),
                ("entity".to_string(), "album".to_string()),
            ]
        );
    }

    #[test]
    fn unparsable_base_is_malformed_request() {
        let client = ITunesClient::builder()
            .base_url("::not a url::")
            .build()
            .unwrap();
        let err = client.search_url().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn non_http_scheme_is_malformed_request() {
        let client = ITunesClient::builder()
            .base_url("mailto:someone@example.com")
            .build()
            .unwrap();
        let err = client.search_url().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
        assert!(matches!(err, Error::UnsupportedScheme(ref s) if s == "mailto"));
    }
}
