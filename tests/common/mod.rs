#![allow(dead_code)]

use itunes_search::{ResultsLoader, clients::ITunesClient};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn two_results_json() -> Value {
    json!({
        "results": [
            {"trackId": 1, "trackName": "A", "collectionName": "X"},
            {"trackId": 2, "trackName": "B", "collectionName": "Y"}
        ]
    })
}

/// Mount a GET /search responder expecting the default fixed query
pub async fn mount_search(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", "eduardo costa"))
        .and(query_param("entity", "song"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn loader_for(base_url: impl Into<String>) -> ResultsLoader {
    let client = ITunesClient::builder()
        .base_url(base_url)
        .build()
        .unwrap();
    ResultsLoader::new(client)
}

/// Base URL of a port nothing listens on
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/search")
}
