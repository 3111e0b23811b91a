//! Page lifecycle: wires the selector, the catalog loader and the
//! recommendation renderer together once the page is ready.

use std::sync::Arc;

use anyhow::{Context, Result};
use api_client::{HttpMovieApi, MovieApi};
use models::CatalogItem;
use tracing::info;

use crate::catalog::CatalogLoader;
use crate::config::ClientConfig;
use crate::renderer::{RecommendationRenderer, RenderOutcome};
use crate::selector::SelectorConfig;
use crate::surface::PageState;

/// One page instance: the selector's data source and the results renderer.
///
/// The two halves share nothing but the selected id handed from
/// `on_change` to the renderer.
pub struct MovieMatchApp {
    selector: SelectorConfig,
    catalog: CatalogLoader,
    renderer: RecommendationRenderer,
    page: Arc<PageState>,
}

impl MovieMatchApp {
    /// Page-ready trigger against the configured HTTP backend
    pub fn ready(config: &ClientConfig) -> Result<Self> {
        let api = HttpMovieApi::new(&config.api_base_url)
            .with_context(|| format!("Failed to create client for {}", config.api_base_url))?;
        info!("Page backend is {}", api.service_address());
        Ok(Self::with_api(Arc::new(api), config))
    }

    /// Page-ready trigger with an explicit backend
    pub fn with_api(api: Arc<dyn MovieApi>, config: &ClientConfig) -> Self {
        let page = Arc::new(PageState::new());
        let catalog = CatalogLoader::new(api.clone(), config.catalog_timeout());
        let renderer = RecommendationRenderer::new(api, page.clone(), config.recommend_timeout());

        info!("Page ready; selector wired to catalog loader");
        Self {
            selector: SelectorConfig::default(),
            catalog,
            renderer,
            page,
        }
    }

    pub fn selector(&self) -> &SelectorConfig {
        &self.selector
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Selector's load callback
    pub async fn load_options(&self, query: &str) -> Vec<CatalogItem> {
        self.catalog.load(query).await
    }

    /// Selector's change callback
    pub async fn on_change(&self, value: Option<&str>) -> RenderOutcome {
        self.renderer.on_change(value).await
    }

    /// Select a catalog entry directly, keeping its id exactly as the
    /// catalog sent it
    pub async fn select(&self, item: &CatalogItem) -> RenderOutcome {
        self.renderer.select(item.id.clone()).await
    }
}
