use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::providers::{SuggestionService, Suggestions};
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Suggestion service exposed over HTTP at `POST /api/suggest/`
pub struct BackendProvider {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    suggestions: Option<String>,
    error: Option<String>,
}

impl BackendProvider {
    /// Create a backend provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, SuggestError> {
        let base_url = config
            .base_url
            .clone()
            .or_else(|| std::env::var("RECIPE_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(BackendProvider {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        BackendProvider {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/suggest/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SuggestionService for BackendProvider {
    fn provider_name(&self) -> &str {
        "backend"
    }

    async fn request(&self, ingredients: &str) -> Result<Suggestions, SuggestError> {
        let endpoint = self.endpoint();
        info!("Fetching suggestions from {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("Accept", "application/json")
            .json(&json!({ "ingredients": ingredients }))
            .send()
            .await?;

        let status = response.status();
        // The backend sends error details as JSON on failures too
        let body: Option<SuggestResponse> = response.json().await.ok();
        debug!("Suggestion response ({}): {:?}", status, body);

        if !status.is_success() {
            let message = body
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            error!("Suggestion API error ({}): {}", status.as_u16(), message);
            return Err(SuggestError::Request(message));
        }

        let body = body.ok_or_else(|| {
            SuggestError::Request("Suggestion service returned an unreadable response".to_string())
        })?;

        if let Some(message) = body.error.filter(|e| !e.is_empty()) {
            error!("Suggestion API application error: {}", message);
            return Err(SuggestError::Request(message));
        }

        info!("Suggestions received successfully");
        Ok(Suggestions {
            suggestions: body.suggestions.unwrap_or_default(),
        })
    }
}
