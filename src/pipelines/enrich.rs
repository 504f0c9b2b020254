use crate::images::ImageService;
use crate::model::{ImageRecord, RecipeRecord};
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// A failure of the image batch as a whole, as opposed to a single lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentFault {
    #[error("image lookups have been shut down")]
    GateClosed,
}

/// Runs one image lookup per recipe behind a concurrency gate.
pub struct Enricher {
    images: Arc<dyn ImageService>,
    gate: Arc<Semaphore>,
    max_concurrent: usize,
}

impl Enricher {
    pub fn new(images: Arc<dyn ImageService>, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Enricher {
            images,
            gate: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Reject all further lookups. Batches that are waiting for the gate
    /// fail with [`EnrichmentFault::GateClosed`].
    pub fn close(&self) {
        self.gate.close();
    }

    /// Look up an image for every query and return them in query order.
    ///
    /// Each lookup runs in its own task and writes to the slot of its index.
    /// A lookup that finds nothing or whose task dies leaves its slot `None`
    /// without touching the others.
    pub async fn lookup_all(
        &self,
        queries: &[String],
    ) -> Result<Vec<Option<ImageRecord>>, EnrichmentFault> {
        let mut handles: Vec<JoinHandle<(usize, Option<ImageRecord>)>> =
            Vec::with_capacity(queries.len());

        for (index, query) in queries.iter().enumerate() {
            let permit = match Arc::clone(&self.gate).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    handles.iter().for_each(JoinHandle::abort);
                    return Err(EnrichmentFault::GateClosed);
                }
            };

            let images = Arc::clone(&self.images);
            let query = query.clone();
            handles.push(tokio::spawn(async move {
                let _permit = permit;
                let image = images.search(&query).await;
                debug!("Image lookup {} (\"{}\") settled: found={}", index, query, image.is_some());
                (index, image)
            }));
        }

        let mut slots: Vec<Option<ImageRecord>> = vec![None; queries.len()];
        for (position, joined) in join_all(handles).await.into_iter().enumerate() {
            match joined {
                Ok((index, image)) => slots[index] = image,
                Err(e) => warn!("Image lookup {} did not complete: {}", position, e),
            }
        }

        Ok(slots)
    }
}

/// Attach images to records by position; the record order is untouched.
pub fn merge_images(
    records: Vec<RecipeRecord>,
    images: Vec<Option<ImageRecord>>,
) -> Vec<RecipeRecord> {
    records
        .into_iter()
        .zip(images.into_iter().chain(std::iter::repeat(None)))
        .map(|(record, image_data)| RecipeRecord {
            image_data,
            ..record
        })
        .collect()
}
