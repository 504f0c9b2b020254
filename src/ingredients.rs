use crate::error::SuggestError;

/// Split free-form ingredient input on commas and newlines.
///
/// Items are trimmed and lowercased; blank items are dropped.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == '\n')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Build the comma-joined query string sent to a suggestion service.
pub fn to_query<S: AsRef<str>>(items: &[S]) -> Result<String, SuggestError> {
    let joined = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    let normalized = normalize(&joined);
    if normalized.is_empty() {
        return Err(SuggestError::InvalidInput(
            "Please enter some valid ingredients first.".to_string(),
        ));
    }

    Ok(normalized.join(", "))
}
