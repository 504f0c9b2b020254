use mockito::{Matcher, Server};
use recipe_suggest::config::SuggestConfig;
use recipe_suggest::images::UnsplashImageService;
use recipe_suggest::{RecipeSuggester, RunOutcome, SuggestError, SuggestionProvider};
use std::sync::Arc;

fn photo_body(id: &str) -> String {
    format!(
        r#"{{
            "results": [{{
                "id": "{id}",
                "urls": {{"small": "https://img/{id}/s.jpg", "regular": "https://img/{id}/r.jpg"}},
                "alt_description": "a bowl of {id}",
                "user": {{"name": "Sam Cook", "links": {{"html": "https://unsplash.com/@sam"}}}},
                "links": {{"html": "https://unsplash.com/photos/{id}"}}
            }}]
        }}"#
    )
}

#[tokio::test]
async fn test_backend_and_unsplash_round() {
    let mut backend = Server::new_async().await;
    let suggest = backend
        .mock("POST", "/api/suggest/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r###"{"suggestions": "## Soup\n## Ingredients\n* Water\n* Salt\n## Steps\n1. Boil water\n2. Add salt\n\n## Stew\n* beef\n1. Braise"}"###,
        )
        .create_async()
        .await;

    let mut unsplash = Server::new_async().await;
    let soup = unsplash
        .mock("GET", "/search/photos")
        .match_query(Matcher::UrlEncoded("query".into(), "Soup".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(photo_body("soup"))
        .create_async()
        .await;
    let stew = unsplash
        .mock("GET", "/search/photos")
        .match_query(Matcher::UrlEncoded("query".into(), "Stew".into()))
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": ["Rate Limit Exceeded"]}"#)
        .create_async()
        .await;

    let mut config = SuggestConfig::default();
    config.images.base_url = unsplash.url();

    let mut suggester = RecipeSuggester::builder()
        .config(config)
        .provider(SuggestionProvider::Backend)
        .base_url(backend.url())
        .unsplash_key("test-key")
        .build()
        .unwrap();

    let outcome = suggester.run("water, salt, beef").await.unwrap();
    let RunOutcome::Ready(batch) = outcome else {
        panic!("expected recipes");
    };

    assert_eq!(batch.recipes.len(), 2);
    let soup_record = &batch.recipes[0];
    assert_eq!(soup_record.title, "Soup");
    assert_eq!(soup_record.ingredients, vec!["Water", "Salt"]);
    assert_eq!(soup_record.instructions, vec!["Boil water", "Add salt"]);
    let image = soup_record.image_data.as_ref().unwrap();
    assert_eq!(image.alt_description, "a bowl of soup");
    assert_eq!(image.photographer.name, "Sam Cook");

    assert_eq!(batch.recipes[1].title, "Stew");
    assert!(batch.recipes[1].image_data.is_none());

    suggest.assert_async().await;
    soup.assert_async().await;
    stew.assert_async().await;
}

#[tokio::test]
async fn test_request_failure_produces_no_records() {
    let mut backend = Server::new_async().await;
    let _suggest = backend
        .mock("POST", "/api/suggest/")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Error: Suggestions blocked by safety filters (Reason: SAFETY). Try different ingredients."}"#)
        .create_async()
        .await;

    let mut unsplash = Server::new_async().await;
    let images = unsplash
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut config = SuggestConfig::default();
    config.images.base_url = unsplash.url();

    let mut suggester = RecipeSuggester::builder()
        .config(config)
        .provider(SuggestionProvider::Backend)
        .base_url(backend.url())
        .unsplash_key("test-key")
        .build()
        .unwrap();

    let err = suggester.run("mustard").await.unwrap_err();
    assert!(matches!(err, SuggestError::Request(_)));
    assert!(err.to_string().contains("safety filters"));
    images.assert_async().await;
}

#[tokio::test]
async fn test_blank_suggestions_are_empty() {
    let mut backend = Server::new_async().await;
    let _suggest = backend
        .mock("POST", "/api/suggest/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggestions": ""}"#)
        .create_async()
        .await;

    let mut suggester = RecipeSuggester::builder()
        .config(SuggestConfig::default())
        .provider(SuggestionProvider::Backend)
        .base_url(backend.url())
        .build()
        .unwrap();

    assert_eq!(suggester.run("ice").await.unwrap(), RunOutcome::Empty);
}

#[tokio::test]
async fn test_gemini_round_without_image_key() {
    let mut gemini = Server::new_async().await;
    let _generate = gemini
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "gemini-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates": [{"content": {"parts": [{"text": "Sorry, it's hard to make a full meal with just mustard and pickles!"}]}}]}"#,
        )
        .create_async()
        .await;

    let mut suggester = RecipeSuggester::builder()
        .config(SuggestConfig::default())
        .provider(SuggestionProvider::Google)
        .api_key("gemini-key")
        .base_url(gemini.url())
        .image_service(Arc::new(UnsplashImageService::with_base_url(
            None,
            "http://127.0.0.1:9".to_string(),
        )))
        .build()
        .unwrap();

    let outcome = suggester.run("mustard, pickles").await.unwrap();
    let recipes = outcome.recipes();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Note from Chef");
    assert!(recipes[0].image_data.is_none());
}
