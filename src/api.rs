use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use log::warn;
use serde::Serialize;

use crate::{
    clients::{SearchResult, errors::ErrorKind},
    loader::ResultsLoader,
};

#[derive(Serialize)]
struct RefreshBody {
    count: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Routes exposing the loader's list: `GET /results` and `POST /refresh`
pub fn router(loader: Arc<ResultsLoader>) -> Router {
    Router::new()
        .route("/results", get(list_results))
        .route("/refresh", post(refresh))
        .with_state(loader)
}

async fn list_results(State(loader): State<Arc<ResultsLoader>>) -> Json<Vec<SearchResult>> {
    Json(loader.results().to_vec())
}

async fn refresh(State(loader): State<Arc<ResultsLoader>>) -> Response {
    match loader.load().await {
        Ok(count) => Json(RefreshBody { count }).into_response(),
        Err(e) => {
            warn!("Refresh failed: {e}");
            let status = match e.kind() {
                ErrorKind::TransportOrDecode => StatusCode::BAD_GATEWAY,
                ErrorKind::MalformedRequest | ErrorKind::Configuration => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(ErrorBody { error: e.to_string() })).into_response()
        }
    }
}
