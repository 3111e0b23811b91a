//! In-memory `MovieApi` used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api_client::{ApiError, ApiResult, MovieApi};
use async_trait::async_trait;
use models::{CatalogItem, CatalogResponse, MovieId, Recommendation, RecommendationResponse};
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub enum FakeReply {
    Batch(RecommendationResponse),
    Fail,
    /// Never answers
    Hang,
}

#[derive(Default)]
pub struct FakeApi {
    catalog: Mutex<Option<CatalogResponse>>,
    replies: Mutex<HashMap<MovieId, FakeReply>>,
    gates: Mutex<HashMap<MovieId, Arc<Notify>>>,
    catalog_calls: AtomicUsize,
    pub recommend_calls: Mutex<Vec<MovieId>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, items: Vec<CatalogItem>) -> Self {
        *self.catalog.lock().unwrap() = Some(CatalogResponse { results: items });
        self
    }

    pub fn reply(self, id: i64, reply: FakeReply) -> Self {
        self.replies.lock().unwrap().insert(MovieId::Number(id), reply);
        self
    }

    pub fn reply_text(self, id: &str, reply: FakeReply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(MovieId::Text(id.to_string()), reply);
        self
    }

    /// Hold the response for `id` until the returned handle is notified
    pub fn gate(&self, id: i64) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(MovieId::Number(id), notify.clone());
        notify
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn fetch_catalog(&self) -> ApiResult<CatalogResponse> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        let catalog = self.catalog.lock().unwrap().clone();
        catalog.ok_or(ApiError::Status {
            status: 503,
            body: "catalog unavailable".to_string(),
        })
    }

    async fn recommend(&self, movie_id: &MovieId) -> ApiResult<RecommendationResponse> {
        self.recommend_calls.lock().unwrap().push(movie_id.clone());

        let gate = self.gates.lock().unwrap().get(movie_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let reply = self.replies.lock().unwrap().get(movie_id).cloned();
        match reply {
            Some(FakeReply::Batch(batch)) => Ok(batch),
            Some(FakeReply::Hang) => std::future::pending().await,
            Some(FakeReply::Fail) | None => Err(ApiError::Status {
                status: 500,
                body: "scoring failed".to_string(),
            }),
        }
    }
}

pub fn catalog_item(id: i64, text: &str) -> CatalogItem {
    CatalogItem {
        id: MovieId::Number(id),
        text: text.to_string(),
        poster: format!("https://img/{}.jpg", id),
    }
}

pub fn recommendation(title: &str, score: f64) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        poster: "https://img/poster.jpg".to_string(),
        overview: format!("Overview of {}", title),
        url: "https://www.themoviedb.org/movie/1".to_string(),
        score,
    }
}

pub fn batch(recs: Vec<Recommendation>) -> FakeReply {
    FakeReply::Batch(RecommendationResponse {
        recommendations: recs,
    })
}
