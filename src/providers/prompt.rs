use crate::error::SuggestError;

/// The prompt template used to ask a model for recipe suggestions.
///
/// Loaded from `prompt.txt` at compile time; `{ingredients}` is replaced with
/// the comma-joined ingredient query.
pub const RECIPE_SUGGESTION_PROMPT: &str = include_str!("prompt.txt");

/// Roughly 3000 tokens at ~4 characters per token.
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Fill the template, rejecting prompts over [`MAX_PROMPT_CHARS`].
pub fn build_suggestion_prompt(ingredients: &str) -> Result<String, SuggestError> {
    let prompt = RECIPE_SUGGESTION_PROMPT.replace("{ingredients}", ingredients);
    let chars = prompt.chars().count();
    if chars > MAX_PROMPT_CHARS {
        return Err(SuggestError::PromptTooLong {
            chars,
            limit: MAX_PROMPT_CHARS,
        });
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(RECIPE_SUGGESTION_PROMPT.contains("{ingredients}"));
        assert!(RECIPE_SUGGESTION_PROMPT.contains("## Recipe Name"));
        assert!(RECIPE_SUGGESTION_PROMPT.contains("* Ingredient"));
        assert!(RECIPE_SUGGESTION_PROMPT.contains("1. Step"));
    }

    #[test]
    fn test_build_suggestion_prompt() {
        let prompt = build_suggestion_prompt("eggs, spinach").unwrap();
        assert!(prompt.contains("**eggs, spinach**"));
        assert!(!prompt.contains("{ingredients}"));
    }

    #[test]
    fn test_build_suggestion_prompt_rejects_long_input() {
        let ingredients = vec!["dragonfruit"; 2000].join(", ");
        let result = build_suggestion_prompt(&ingredients);
        assert!(matches!(
            result,
            Err(SuggestError::PromptTooLong { limit: MAX_PROMPT_CHARS, .. })
        ));
    }
}
