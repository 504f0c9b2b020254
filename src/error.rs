use thiserror::Error;

/// Errors that can end a suggestion run or prevent one from starting
#[derive(Error, Debug)]
pub enum SuggestError {
    /// The suggestion service reported a failure (status code or error field)
    #[error("{0}")]
    Request(String),

    /// Transport failure talking to a remote service
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The ingredient query was unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generated prompt exceeds the provider's character budget
    #[error("Input is too long (approx. {} tokens). Please reduce the number of ingredients.", .chars / 4)]
    PromptTooLong { chars: usize, limit: usize },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SuggestError {
    /// True when the failure came from the suggestion call itself rather than
    /// from local validation or setup.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, SuggestError::Request(_) | SuggestError::Http(_))
    }
}
