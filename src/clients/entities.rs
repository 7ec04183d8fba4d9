use serde::{Deserialize, Serialize};

/// Top-level envelope returned by the iTunes search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Hits in the order the endpoint returned them
    pub results: Vec<SearchResult>,
}

/// One decoded search hit. `track_id` is the list identity; uniqueness is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// List identity
    pub track_id: i64,
    /// Display title
    pub track_name: String,
    /// Album the track belongs to
    pub collection_name: String,
}
