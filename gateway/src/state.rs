use std::sync::Arc;

use crate::config::{ConfigError, ServerConfig};
use crate::pages::PageRenderer;
use crate::practice::PracticeRegistry;

/// Errors raised while building [`AppState`].
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to compile page templates: {0}")]
    Templates(#[from] handlebars::TemplateError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared, immutable application state.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub registry: PracticeRegistry,
    pub pages: PageRenderer,
    /// Pooled client for Play.ht calls; providers clone the handle per request.
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, StateError> {
        let registry = config.practice_registry()?;
        let pages = PageRenderer::new()?;
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(8)
            .build()?;

        tracing::info!(
            default_practice = registry.default_practice().id,
            pinned = registry.is_pinned(),
            practices = registry.all().len(),
            "Application state initialized"
        );

        Ok(Arc::new(Self {
            config,
            registry,
            pages,
            http_client,
        }))
    }
}
