use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a search from reaching the result list
#[derive(Error, Debug)]
pub enum Error {
    /// The base URL and query did not form a URL
    #[error("Invalid search URL: {0}")]
    MalformedRequest(#[from] url::ParseError),

    /// The URL parsed but cannot be fetched over HTTP
    #[error("Unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    /// The GET itself failed
    #[error("Search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a search envelope
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A setting from the environment or command line was invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Coarse classification callers can branch on without matching every variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request target could not be built from the configured query
    MalformedRequest,
    /// The GET failed or the body did not match the expected shape
    TransportOrDecode,
    /// A setting could not be read before any request was built
    Configuration,
}

impl Error {
    /// Classify this error for callers that only care about the failure class
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedRequest(_) | Error::UnsupportedScheme(_) => ErrorKind::MalformedRequest,
            Error::Transport(_) | Error::Decode(_) => ErrorKind::TransportOrDecode,
            Error::ConfigurationError(_) => ErrorKind::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_variants() {
        let parse = url::Url::parse("not a url").unwrap_err();
        assert_eq!(Error::from(parse).kind(), ErrorKind::MalformedRequest);

        let scheme = Error::UnsupportedScheme("mailto".into());
        assert_eq!(scheme.kind(), ErrorKind::MalformedRequest);

        let decode = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert_eq!(Error::from(decode).kind(), ErrorKind::TransportOrDecode);

        let config = Error::ConfigurationError("bad timeout".into());
        assert_eq!(config.kind(), ErrorKind::Configuration);
    }
}
