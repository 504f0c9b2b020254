pub mod builder;
pub mod config;
pub mod error;
pub mod images;
pub mod ingredients;
pub mod model;
pub mod parser;
pub mod pipelines;
pub mod providers;

pub use builder::{RecipeSuggester, RecipeSuggesterBuilder, SuggestionProvider};
pub use error::SuggestError;
pub use model::{ImageRecord, ImageUrls, Photographer, RecipeRecord};
pub use parser::parse;
pub use pipelines::{EnrichedBatch, Orchestrator, RunEvent, RunOutcome, RunState};

/// Suggest recipes for a list of ingredients using the configured services.
///
/// Loads `config.toml` and `RECIPE_SUGGEST__*` environment variables, asks
/// the default provider for suggestions and attaches a photo to each recipe.
pub async fn suggest_recipes<S: AsRef<str>>(items: &[S]) -> Result<RunOutcome, SuggestError> {
    let query = ingredients::to_query(items)?;
    let mut orchestrator = RecipeSuggester::builder().build()?;
    orchestrator.run(&query).await
}
