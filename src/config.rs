use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level configuration for a suggestion run
#[derive(Debug, Deserialize, Clone)]
pub struct SuggestConfig {
    /// Suggestion provider to use when not specified
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Image search configuration
    #[serde(default)]
    pub images: ImageConfig,
    /// Enrichment fan-out configuration
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Configuration for a suggestion provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Configuration for the image search service
#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// Unsplash access key (falls back to UNSPLASH_ACCESS_KEY)
    pub access_key: Option<String>,
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_content_filter")]
    pub content_filter: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_image_base_url(),
            orientation: default_orientation(),
            content_filter: default_content_filter(),
        }
    }
}

/// Configuration for the per-recipe image lookups
#[derive(Debug, Deserialize, Clone)]
pub struct EnrichmentConfig {
    /// Upper bound on image lookups in flight at once
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_image_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_orientation() -> String {
    "landscape".to_string()
}

fn default_content_filter() -> String {
    "high".to_string()
}

fn default_max_concurrent_lookups() -> usize {
    8
}

fn default_timeout() -> u64 {
    30
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            images: ImageConfig::default(),
            enrichment: EnrichmentConfig::default(),
            timeout: default_timeout(),
        }
    }
}

impl SuggestConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SUGGEST__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SUGGEST__PROVIDERS__GOOGLE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration for a named provider, defaults when it is not listed
    pub fn provider(&self, name: &str) -> ProviderConfig {
        self.providers.get(name).cloned().unwrap_or_default()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<SuggestConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_SUGGEST__IMAGES__ACCESS_KEY
        .add_source(
            Environment::with_prefix("RECIPE_SUGGEST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
