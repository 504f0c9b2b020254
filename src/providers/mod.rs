mod backend;
mod factory;
mod google;
mod prompt;

pub use backend::BackendProvider;
pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use prompt::{build_suggestion_prompt, MAX_PROMPT_CHARS, RECIPE_SUGGESTION_PROMPT};

use crate::error::SuggestError;
use async_trait::async_trait;
use serde::Deserialize;

/// Raw text returned by a suggestion service, ready for the parser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub suggestions: String,
}

/// Unified trait for services that generate recipe suggestions
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Get the provider name (e.g., "google", "backend")
    fn provider_name(&self) -> &str;

    /// Ask for recipes using a comma-joined ingredient query
    async fn request(&self, ingredients: &str) -> Result<Suggestions, SuggestError>;
}
