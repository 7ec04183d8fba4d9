/// Search response envelope and result records
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// iTunes search API client
pub mod itunes;

pub use entities::{SearchResponse, SearchResult};
pub use itunes::ITunesClient;
