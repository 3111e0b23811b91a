//! HTTP client for the movie-match backend.
//!
//! This crate talks to the two endpoints the UI consumes:
//! - `GET /api/movies` for the selectable catalog
//! - `POST /api/recommend` for a ranked recommendation batch
//!
//! The `MovieApi` trait is the seam the UI crate depends on, so the
//! request/render cycle can be driven by an in-memory fake in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, error, info};

use models::{CatalogResponse, MovieId, RecommendRequest, RecommendationResponse};

const CATALOG_PATH: &str = "api/movies";
const RECOMMEND_PATH: &str = "api/recommend";

/// Errors that can occur when talking to the backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid backend base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Backend did not answer within {0:?}")]
    Timeout(Duration),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The backend operations the UI flow depends on.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch the full catalog. No query parameters are sent.
    async fn fetch_catalog(&self) -> ApiResult<CatalogResponse>;

    /// Request the ranked recommendations for one movie.
    async fn recommend(&self, movie_id: &MovieId) -> ApiResult<RecommendationResponse>;
}

/// `MovieApi` implementation backed by `reqwest`.
#[derive(Clone)]
pub struct HttpMovieApi {
    client: Client,
    base_url: Url,
}

impl HttpMovieApi {
    /// Create a client for the backend rooted at `base_url`
    /// (e.g. "http://127.0.0.1:5000").
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let raw = base_url.as_ref();
        // Url::join drops the last path segment unless it ends with '/'
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        info!("Using movie-match backend at {}", base_url);
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Get the address of the backend this client talks to.
    pub fn service_address(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Check the status and decode the JSON body.
    ///
    /// The body is read as text first so transport failures and malformed
    /// JSON surface as different errors.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Backend returned status {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to decode backend response: {}", e);
            ApiError::Decode(e)
        })
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn fetch_catalog(&self) -> ApiResult<CatalogResponse> {
        let url = self.endpoint(CATALOG_PATH)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let catalog: CatalogResponse = Self::decode(response).await?;

        debug!("Catalog returned {} items", catalog.results.len());
        Ok(catalog)
    }

    async fn recommend(&self, movie_id: &MovieId) -> ApiResult<RecommendationResponse> {
        let url = self.endpoint(RECOMMEND_PATH)?;
        debug!("POST {} for movie {}", url, movie_id);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(url)
            .json(&RecommendRequest {
                movie_id: movie_id.clone(),
            })
            .send()
            .await?;
        let batch: RecommendationResponse = Self::decode(response).await?;

        debug!(
            "Recommendation batch for movie {} has {} entries",
            movie_id,
            batch.len()
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    // ============================================================================
    // Mock Backend
    // ============================================================================

    async fn catalog_handler() -> Json<Value> {
        Json(json!({
            "results": [
                { "id": 1, "text": "Toy Story (1995)", "poster": "https://img/1.jpg" },
                { "id": 42, "text": "Inception (2010)", "poster": "https://img/42.jpg" },
            ]
        }))
    }

    /// Echoes the requested id back in the title and checks the content type
    async fn recommend_handler(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Json(json!({
            "recommendations": [
                {
                    "title": format!("Echo {} (2001)", body["movie_id"]),
                    "poster": "",
                    "overview": content_type,
                    "url": "https://tmdb/1",
                    "score": 91
                }
            ]
        }))
    }

    /// Start a mock backend on a random port
    async fn start_mock_backend(router: Router) -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock backend failed");
        });

        (format!("http://{}", addr), handle)
    }

    fn healthy_backend() -> Router {
        Router::new()
            .route("/api/movies", get(catalog_handler))
            .route("/api/recommend", post(recommend_handler))
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpMovieApi::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_with_path_keeps_prefix() {
        let api = HttpMovieApi::new("http://localhost:5000/app").unwrap();
        let url = api.endpoint(RECOMMEND_PATH).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/app/api/recommend");
    }

    #[tokio::test]
    async fn test_fetch_catalog() {
        let (addr, handle) = start_mock_backend(healthy_backend()).await;
        let api = HttpMovieApi::new(&addr).unwrap();

        let catalog = api.fetch_catalog().await.expect("catalog should load");

        assert_eq!(catalog.results.len(), 2);
        assert_eq!(catalog.results[1].id, MovieId::Number(42));
        assert_eq!(catalog.results[1].text, "Inception (2010)");

        handle.abort();
    }

    #[tokio::test]
    async fn test_recommend_posts_json_body() {
        let (addr, handle) = start_mock_backend(healthy_backend()).await;
        let api = HttpMovieApi::new(&addr).unwrap();

        let batch = api
            .recommend(&MovieId::Number(42))
            .await
            .expect("recommend should succeed");

        assert_eq!(batch.len(), 1);
        let rec = &batch.recommendations[0];
        assert_eq!(rec.title, "Echo 42 (2001)");
        assert_eq!(rec.overview, "application/json");
        assert_eq!(rec.score_percent(), 91);

        handle.abort();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let router = Router::new().route(
            "/api/recommend",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let (addr, handle) = start_mock_backend(router).await;
        let api = HttpMovieApi::new(&addr).unwrap();

        let err = api.recommend(&MovieId::Number(1)).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route("/api/movies", get(|| async { "<html>oops</html>" }));
        let (addr, handle) = start_mock_backend(router).await;
        let api = HttpMovieApi::new(&addr).unwrap();

        let err = api.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        handle.abort();
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop so the port is very likely closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpMovieApi::new(format!("http://{}", addr)).unwrap();
        let err = api.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
