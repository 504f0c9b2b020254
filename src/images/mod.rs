mod unsplash;

pub use unsplash::UnsplashImageService;

use crate::model::ImageRecord;
use async_trait::async_trait;

/// Looks up one illustrative photo for a search query.
///
/// Implementations never fail: missing credentials, rate limits, empty
/// results and transport errors all come back as `None`.
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn search(&self, query: &str) -> Option<ImageRecord>;
}
