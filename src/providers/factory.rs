use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::providers::{BackendProvider, GoogleProvider, SuggestionService};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Box<dyn SuggestionService>, SuggestError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(SuggestError::Builder(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "google" => Ok(Box::new(GoogleProvider::new(config, timeout)?)),
            "backend" => Ok(Box::new(BackendProvider::new(config, timeout)?)),
            _ => Err(SuggestError::Builder(format!(
                "Unknown provider: {} (available: {})",
                provider_name,
                Self::available_providers().join(", ")
            ))),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "backend"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider_config() -> ProviderConfig {
        ProviderConfig {
            api_key: Some("test-key".to_string()),
            base_url: Some("http://localhost:5000".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_create_google_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("google", &config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_create_backend_provider() {
        let config = create_test_provider_config();
        let provider =
            ProviderFactory::create("backend", &config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "backend");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_provider_config();
        let result = ProviderFactory::create("unknown", &config, Duration::from_secs(5));
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(
                e.to_string(),
                "Builder error: Unknown provider: unknown (available: google, backend)"
            );
        }
    }

    #[test]
    fn test_create_disabled_provider() {
        let mut config = create_test_provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("google", &config, Duration::from_secs(5));
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("not enabled in configuration"));
        }
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers, vec!["google", "backend"]);
    }
}
