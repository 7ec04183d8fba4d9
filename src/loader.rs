use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};

use crate::clients::{
    ITunesClient, SearchResult,
    errors::{ErrorKind, Result},
};

/// Owns the displayed result list and the single fetch that refreshes it.
///
/// Subscribers get a [`watch::Receiver`] and are notified only when a fetch
/// succeeds. A failed fetch never touches the list. Overlapping loads run
/// one after another in call order, so the last one started lands last.
pub struct ResultsLoader {
    client: ITunesClient,
    results: watch::Sender<Arc<[SearchResult]>>,
    // Held across search and replace
    in_flight: Mutex<()>,
}

impl ResultsLoader {
    /// Loader with an empty list
    pub fn new(client: ITunesClient) -> Self {
        let (results, _) = watch::channel::<Arc<[SearchResult]>>(Arc::from(Vec::new()));
        ResultsLoader {
            client,
            results,
            in_flight: Mutex::new(()),
        }
    }

    /// Snapshot of the current list
    pub fn results(&self) -> Arc<[SearchResult]> {
        self.results.borrow().clone()
    }

    /// Receiver notified on every successful load
    pub fn subscribe(&self) -> watch::Receiver<Arc<[SearchResult]>> {
        self.results.subscribe()
    }

    /// Fetch, decode, and replace the whole list. Returns the new length.
    pub async fn load(&self) -> Result<usize> {
        let _guard = self.in_flight.lock().await;
        debug!(
            "Loading results for term {:?} (entity {:?}) ...",
            self.client.term(),
            self.client.entity()
        );
        let response = self.client.search().await?;
        let count = response.results.len();
        self.results.send_replace(Arc::from(response.results));
        Ok(count)
    }

    /// Same as [`load`](Self::load) but failures are only logged
    pub async fn load_and_log(&self) {
        match self.load().await {
            Ok(count) => info!("Loaded {count} results"),
            Err(e) => match e.kind() {
                ErrorKind::MalformedRequest | ErrorKind::Configuration => {
                    warn!("Invalid URL: {e}");
                }
                ErrorKind::TransportOrDecode => warn!("Invalid data: {e}"),
            },
        }
    }
}
