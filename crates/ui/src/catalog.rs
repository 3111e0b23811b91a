//! # Catalog Loader
//!
//! Bridges the search widget's "need options for a query" event to
//! `GET /api/movies`. The query text is not forwarded: the backend returns
//! the whole catalog and the widget filters it locally.
//!
//! Failures never reach the widget. Transport errors, bad statuses,
//! malformed bodies and timeouts all resolve to an empty option list so the
//! selector is never left pending.

use std::sync::Arc;
use std::time::{Duration, Instant};

use api_client::MovieApi;
use models::CatalogItem;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct CatalogLoader {
    api: Arc<dyn MovieApi>,
    timeout: Duration,
}

impl CatalogLoader {
    pub fn new(api: Arc<dyn MovieApi>, timeout: Duration) -> Self {
        Self { api, timeout }
    }

    /// Fetch the options for `query`. Always resolves, possibly to an empty
    /// list.
    pub async fn load(&self, query: &str) -> Vec<CatalogItem> {
        let start_time = Instant::now();
        debug!("Loading catalog options for query {:?}", query);

        match tokio::time::timeout(self.timeout, self.api.fetch_catalog()).await {
            Ok(Ok(catalog)) => {
                info!(
                    "Loaded {} catalog options in {:.2?}",
                    catalog.results.len(),
                    start_time.elapsed()
                );
                catalog.results
            }
            Ok(Err(e)) => {
                warn!("Catalog load failed, showing no options: {}", e);
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "Catalog load timed out after {:?}, showing no options",
                    self.timeout
                );
                Vec::new()
            }
        }
    }

    /// Widget-style entry point: `callback` is invoked exactly once with the
    /// loaded options.
    pub async fn load_with<F>(&self, query: &str, callback: F)
    where
        F: FnOnce(Vec<CatalogItem>),
    {
        callback(self.load(query).await);
    }
}
