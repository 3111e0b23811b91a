//! # Recommendation Renderer
//!
//! Owns the selection-to-render cycle for the results grid:
//! 1. Ignore empty selections
//! 2. Leave the initial layout and reveal the results container
//! 3. Show the loading placeholder (before any network work)
//! 4. Request recommendations for the selected movie, bounded by a timeout
//! 5. Replace the grid with cards, the no-results message or an error
//!
//! ## Latest selection wins
//!
//! Every selection takes a new token from a counter. The loading write and
//! the terminal write both happen while holding the counter's lock, and the
//! terminal write only goes through if the token is still current. A slow
//! response for an older selection is therefore dropped instead of
//! overwriting the grid.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use api_client::{ApiError, ApiResult, MovieApi};
use models::{MovieId, RecommendationResponse};
use tracing::{debug, error, info, warn};

use crate::surface::ResultsSurface;
use crate::view::{CardView, ERROR_MESSAGE, GridContent};

/// How one selection event ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Empty selection value; nothing was touched
    Ignored,
    /// Grid shows this many cards
    Rendered(usize),
    /// Grid shows the no-results message
    Empty,
    /// Grid shows the error message
    Failed,
    /// A newer selection took over before the response arrived
    Superseded,
}

pub struct RecommendationRenderer {
    api: Arc<dyn MovieApi>,
    surface: Arc<dyn ResultsSurface>,
    timeout: Duration,
    /// Token of the most recent selection
    latest: Mutex<u64>,
}

impl RecommendationRenderer {
    pub fn new(api: Arc<dyn MovieApi>, surface: Arc<dyn ResultsSurface>, timeout: Duration) -> Self {
        Self {
            api,
            surface,
            timeout,
            latest: Mutex::new(0),
        }
    }

    /// Selection-change handler: `value` is the widget's raw value.
    pub async fn on_change(&self, value: Option<&str>) -> RenderOutcome {
        let Some(movie_id) = value.and_then(|v| v.parse::<MovieId>().ok()) else {
            debug!("Ignoring empty selection");
            return RenderOutcome::Ignored;
        };
        self.select(movie_id).await
    }

    /// Run the full request/render cycle for `movie_id`.
    pub async fn select(&self, movie_id: MovieId) -> RenderOutcome {
        let start_time = Instant::now();
        let token = self.enter(&movie_id);

        let result = self.request(&movie_id).await;

        let outcome = self.finish(token, &movie_id, result);
        info!(
            "Selection {} for movie {} finished as {:?} in {:.2?}",
            token,
            movie_id,
            outcome,
            start_time.elapsed()
        );
        outcome
    }

    /// Layout transition and loading placeholder, returning the new token
    fn enter(&self, movie_id: &MovieId) -> u64 {
        let mut latest = self.lock_latest();
        *latest += 1;

        self.surface.remove_initial_layout();
        self.surface.reveal_results();
        self.surface.replace_grid(GridContent::Loading);

        debug!("Selection {} entered for movie {}", *latest, movie_id);
        *latest
    }

    async fn request(&self, movie_id: &MovieId) -> ApiResult<RecommendationResponse> {
        match tokio::time::timeout(self.timeout, self.api.recommend(movie_id)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout(self.timeout)),
        }
    }

    /// Apply the terminal grid state if `token` is still the latest selection
    fn finish(
        &self,
        token: u64,
        movie_id: &MovieId,
        result: ApiResult<RecommendationResponse>,
    ) -> RenderOutcome {
        let latest = self.lock_latest();
        if *latest != token {
            warn!(
                "Dropping response for movie {} (selection {} superseded by {})",
                movie_id, token, *latest
            );
            return RenderOutcome::Superseded;
        }

        let (content, outcome) = match result {
            Ok(batch) if batch.is_empty() => (GridContent::NoResults, RenderOutcome::Empty),
            Ok(batch) => {
                // Rank order is the backend's; never re-sort
                let cards: Vec<CardView> = batch.recommendations.iter().map(CardView::from).collect();
                let count = cards.len();
                (GridContent::Cards(cards), RenderOutcome::Rendered(count))
            }
            Err(e) => {
                error!("Recommendation request for movie {} failed: {}", movie_id, e);
                (
                    GridContent::Error(ERROR_MESSAGE.to_string()),
                    RenderOutcome::Failed,
                )
            }
        };

        self.surface.replace_grid(content);
        drop(latest);
        outcome
    }

    fn lock_latest(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
