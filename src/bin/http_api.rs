//! Serves the search result list over HTTP and loads it once at startup.

use std::sync::Arc;

use itunes_search::{ResultsLoader, api, config::ConfigBuilder};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ConfigBuilder::new().build()?;
    let loader = Arc::new(ResultsLoader::new(config.itunes));

    // Initial load runs alongside the server; until it lands /results is empty
    let initial = loader.clone();
    tokio::spawn(async move { initial.load_and_log().await });

    let listener = tokio::net::TcpListener::bind(&config.api_addr).await?;
    info!("Serving results on http://{}", listener.local_addr()?);
    axum::serve(listener, api::router(loader)).await?;

    Ok(())
}
