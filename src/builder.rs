use log::warn;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    config::SuggestConfig,
    images::{ImageService, UnsplashImageService},
    pipelines::{Enricher, Orchestrator, RunEvent},
    providers::{ProviderFactory, SuggestionService},
    SuggestError,
};

/// Built-in suggestion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionProvider {
    /// Google Gemini, called directly
    Google,
    /// A recipe backend exposing `POST /api/suggest/`
    Backend,
}

impl SuggestionProvider {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &str {
        match self {
            SuggestionProvider::Google => "google",
            SuggestionProvider::Backend => "backend",
        }
    }
}

/// Builder for configuring a suggestion [`Orchestrator`]
#[derive(Default)]
pub struct RecipeSuggesterBuilder {
    config: Option<SuggestConfig>,
    provider: Option<SuggestionProvider>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    unsplash_key: Option<String>,
    max_concurrent_lookups: Option<usize>,
    events: Option<UnboundedSender<RunEvent>>,
    suggestion_service: Option<Box<dyn SuggestionService>>,
    image_service: Option<Arc<dyn ImageService>>,
}

impl RecipeSuggesterBuilder {
    /// Use this configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: SuggestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the suggestion provider
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::{RecipeSuggester, SuggestionProvider};
    ///
    /// let builder = RecipeSuggester::builder()
    ///     .provider(SuggestionProvider::Backend)
    ///     .base_url("http://localhost:5000");
    /// ```
    pub fn provider(mut self, provider: SuggestionProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the suggestion provider
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the suggestion provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the base URL of the suggestion provider
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the Unsplash access key used for recipe photos
    pub fn unsplash_key(mut self, key: impl Into<String>) -> Self {
        self.unsplash_key = Some(key.into());
        self
    }

    /// Cap the number of image lookups in flight at once
    pub fn max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = Some(limit);
        self
    }

    /// Receive state changes and unenriched records while a run progresses
    pub fn events(mut self, sender: UnboundedSender<RunEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Use a custom suggestion service instead of a built-in provider
    pub fn suggestion_service(mut self, service: Box<dyn SuggestionService>) -> Self {
        self.suggestion_service = Some(service);
        self
    }

    /// Use a custom image service instead of Unsplash
    pub fn image_service(mut self, service: Arc<dyn ImageService>) -> Self {
        self.image_service = Some(service);
        self
    }

    /// Build the orchestrator
    ///
    /// # Errors
    /// Returns `SuggestError` if:
    /// - The configuration cannot be loaded
    /// - The provider is unknown, disabled or missing its API key
    /// - The image lookup limit is zero
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_suggest::RecipeSuggester;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut suggester = RecipeSuggester::builder().api_key("gemini-key").build()?;
    /// let outcome = suggester.run("eggs, spinach").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Orchestrator, SuggestError> {
        let config = match self.config {
            Some(config) => config,
            None => SuggestConfig::load()?,
        };

        let limit = self
            .max_concurrent_lookups
            .unwrap_or(config.enrichment.max_concurrent_lookups);
        if limit == 0 {
            return Err(SuggestError::Builder(
                "max_concurrent_lookups must be at least 1".to_string(),
            ));
        }

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout));

        let suggestions = match self.suggestion_service {
            Some(service) => service,
            None => {
                let provider_name = self
                    .provider
                    .as_ref()
                    .map(|p| p.as_str())
                    .unwrap_or(config.default_provider.as_str());

                let mut provider_config = config.provider(provider_name);
                if let Some(api_key) = self.api_key {
                    provider_config.api_key = Some(api_key);
                }
                if let Some(model) = self.model {
                    provider_config.model = model;
                }
                if let Some(base_url) = self.base_url {
                    provider_config.base_url = Some(base_url);
                }

                ProviderFactory::create(provider_name, &provider_config, timeout)?
            }
        };

        let images: Arc<dyn ImageService> = match self.image_service {
            Some(service) => service,
            None => {
                let mut image_config = config.images.clone();
                if let Some(key) = self.unsplash_key {
                    image_config.access_key = Some(key);
                }
                let service = UnsplashImageService::new(&image_config, timeout)?;
                if !service.has_credentials() {
                    warn!("No Unsplash access key configured, recipes will have no photos");
                }
                Arc::new(service)
            }
        };

        let mut orchestrator = Orchestrator::from_parts(suggestions, Enricher::new(images, limit));
        if let Some(events) = self.events {
            orchestrator = orchestrator.with_events(events);
        }

        Ok(orchestrator)
    }
}

/// Main entry point for the builder API
pub struct RecipeSuggester;

impl RecipeSuggester {
    /// Creates a new builder for suggestion runs
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::RecipeSuggester;
    ///
    /// let builder = RecipeSuggester::builder();
    /// ```
    pub fn builder() -> RecipeSuggesterBuilder {
        RecipeSuggesterBuilder::default()
    }
}
