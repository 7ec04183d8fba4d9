//! itunes-search - Load iTunes search results into an observable list
//!
//! This library builds a search request, fetches it once, decodes the JSON
//! envelope and replaces an in-memory result list that subscribers can watch.

/// HTTP routes exposing the result list
pub mod api;
/// Client modules for the iTunes search endpoint
pub mod clients;
/// Configuration from the environment and command line
pub mod config;
/// Result list state and the fetch operation that refreshes it
pub mod loader;

pub use loader::ResultsLoader;
