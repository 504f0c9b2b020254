use crate::config::ImageConfig;
use crate::error::SuggestError;
use crate::images::ImageService;
use crate::model::{ImageRecord, ImageUrls, Photographer};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Image search backed by the Unsplash photo API
pub struct UnsplashImageService {
    client: Client,
    access_key: Option<String>,
    base_url: String,
    orientation: String,
    content_filter: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    id: String,
    urls: PhotoUrls,
    alt_description: Option<String>,
    user: PhotoUser,
    links: Links,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: String,
    regular: String,
}

#[derive(Debug, Deserialize)]
struct PhotoUser {
    name: String,
    links: Links,
}

#[derive(Debug, Deserialize)]
struct Links {
    html: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

impl Photo {
    fn into_record(self, query: &str) -> ImageRecord {
        ImageRecord {
            id: self.id,
            urls: ImageUrls {
                small: self.urls.small,
                regular: self.urls.regular,
            },
            alt_description: self
                .alt_description
                .filter(|alt| !alt.trim().is_empty())
                .unwrap_or_else(|| format!("Image related to {}", query)),
            photographer: Photographer {
                name: self.user.name,
                profile_link: self.user.links.html,
            },
            photo_link: self.links.html,
        }
    }
}

impl UnsplashImageService {
    /// Create the service from configuration, falling back to UNSPLASH_ACCESS_KEY
    pub fn new(config: &ImageConfig, timeout: Duration) -> Result<Self, SuggestError> {
        let access_key = config
            .access_key
            .clone()
            .or_else(|| std::env::var("UNSPLASH_ACCESS_KEY").ok())
            .filter(|key| !key.trim().is_empty());

        Ok(UnsplashImageService {
            client: Client::builder().timeout(timeout).build()?,
            access_key,
            base_url: config.base_url.clone(),
            orientation: config.orientation.clone(),
            content_filter: config.content_filter.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(access_key: Option<String>, base_url: String) -> Self {
        let defaults = ImageConfig::default();
        UnsplashImageService {
            client: Client::new(),
            access_key,
            base_url,
            orientation: defaults.orientation,
            content_filter: defaults.content_filter,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.access_key.is_some()
    }
}

#[async_trait]
impl ImageService for UnsplashImageService {
    async fn search(&self, query: &str) -> Option<ImageRecord> {
        let Some(access_key) = &self.access_key else {
            error!("Unsplash access key is missing, skipping image for \"{}\"", query);
            return None;
        };

        debug!("Fetching Unsplash image for query: \"{}\"", query);
        let response = self
            .client
            .get(format!("{}/search/photos", self.base_url.trim_end_matches('/')))
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", self.orientation.as_str()),
                ("content_filter", self.content_filter.as_str()),
            ])
            .header("Authorization", format!("Client-ID {}", access_key))
            .header("Accept-Version", "v1")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                error!("Unsplash request failed for \"{}\": {}", query, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let details: ErrorResponse = response.json().await.unwrap_or_default();
            let reason = if details.errors.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                details.errors.join(", ")
            };
            error!("Unsplash API error ({}): {}", status.as_u16(), reason);
            return None;
        }

        let body: SearchResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!("Unreadable Unsplash response for \"{}\": {}", query, e);
                return None;
            }
        };

        match body.results.into_iter().next() {
            Some(photo) => {
                info!("Unsplash image found for \"{}\"", query);
                Some(photo.into_record(query))
            }
            None => {
                warn!("No Unsplash image found for query: \"{}\"", query);
                None
            }
        }
    }
}
