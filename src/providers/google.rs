use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::providers::{build_suggestion_prompt, SuggestionService, Suggestions};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, SuggestError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                SuggestError::Builder("GEMINI_API_KEY not found in config or environment".into())
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(GoogleProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl SuggestionService for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn request(&self, ingredients: &str) -> Result<Suggestions, SuggestError> {
        let items = crate::ingredients::normalize(ingredients);
        if items.is_empty() {
            return Err(SuggestError::InvalidInput("No ingredients provided.".to_string()));
        }

        let prompt = build_suggestion_prompt(&items.join(", "))?;
        debug!("Prompt length estimate: {} chars", prompt.len());

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await.unwrap_or(Value::Null);
        debug!("Gemini call took {:?}: {:?}", start.elapsed(), response_body);

        if !status.is_success() {
            let message = response_body["error"]["message"]
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            return Err(SuggestError::Request(message));
        }

        let candidates = response_body["candidates"].as_array();
        if candidates.map_or(true, |c| c.is_empty()) {
            let reason = response_body["promptFeedback"]["blockReason"]
                .as_str()
                .unwrap_or("Unknown");
            warn!("Gemini response blocked or without candidates: {}", reason);
            return Err(SuggestError::Request(format!(
                "Suggestions blocked by safety filters (Reason: {}). Try different ingredients.",
                reason
            )));
        }

        let text: String = response_body["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            warn!("Gemini returned a candidate without text");
            return Err(SuggestError::Request(
                "The model generated an empty response. Try adding more ingredients.".to_string(),
            ));
        }

        info!("Received suggestions from {}", self.model);
        Ok(Suggestions {
            suggestions: text.trim().to_string(),
        })
    }
}
