//! Drives one suggestion run: request, parse, then enrich with photos.
//!
//! ```text
//! Idle -> Requesting -> Failed | Empty | Parsed -> Enriching -> Ready
//! ```
//!
//! Every terminal state hands control back to `Idle`. Only a failed
//! suggestion request ends a run without records; image problems degrade to
//! records without `image_data`.

use crate::error::SuggestError;
use crate::images::ImageService;
use crate::model::RecipeRecord;
use crate::parser;
use crate::pipelines::enrich::{merge_images, Enricher, DEFAULT_MAX_CONCURRENT_LOOKUPS};
use crate::providers::SuggestionService;
use log::{debug, error, info, warn};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    Idle,
    Requesting,
    Failed,
    Empty,
    Parsed,
    Enriching,
    Ready,
}

/// Progress notifications for a caller that renders while a run is in flight
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    State(RunState),
    /// Records exist for the first time, none of them enriched yet
    Parsed(Vec<RecipeRecord>),
    /// The image batch failed as a whole; the run continues without images
    EnrichmentDegraded(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedBatch {
    pub recipes: Vec<RecipeRecord>,
    /// Set when images could not be loaded for the batch
    pub degraded: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Ready(EnrichedBatch),
    /// The service answered with nothing to show
    Empty,
}

impl RunOutcome {
    pub fn recipes(&self) -> &[RecipeRecord] {
        match self {
            RunOutcome::Ready(batch) => &batch.recipes,
            RunOutcome::Empty => &[],
        }
    }
}

pub struct Orchestrator {
    suggestions: Box<dyn SuggestionService>,
    enricher: Enricher,
    events: Option<UnboundedSender<RunEvent>>,
    state: RunState,
    runs: u64,
}

impl Orchestrator {
    pub fn new(suggestions: Box<dyn SuggestionService>, images: Arc<dyn ImageService>) -> Self {
        Self::from_parts(
            suggestions,
            Enricher::new(images, DEFAULT_MAX_CONCURRENT_LOOKUPS),
        )
    }

    pub fn from_parts(suggestions: Box<dyn SuggestionService>, enricher: Enricher) -> Self {
        Orchestrator {
            suggestions,
            enricher,
            events: None,
            state: RunState::Idle,
            runs: 0,
        }
    }

    pub fn with_events(mut self, events: UnboundedSender<RunEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn enricher(&self) -> &Enricher {
        &self.enricher
    }

    /// Run the whole pipeline for one ingredient query.
    ///
    /// Returns `Err` only when the suggestion request fails.
    pub async fn run(&mut self, ingredient_query: &str) -> Result<RunOutcome, SuggestError> {
        self.runs += 1;
        let run = self.runs;

        self.transition(run, RunState::Requesting);
        info!(
            "[run {}] Requesting suggestions from {} for: {}",
            run,
            self.suggestions.provider_name(),
            ingredient_query
        );

        let raw = match self.suggestions.request(ingredient_query).await {
            Ok(response) => response.suggestions,
            Err(e) => {
                if e.is_request_failure() {
                    error!("[run {}] Suggestion request failed: {}", run, e);
                } else {
                    warn!("[run {}] Suggestion request rejected: {}", run, e);
                }
                self.finish(run, RunState::Failed);
                return Err(e);
            }
        };

        let records = parser::parse(&raw);
        if records.is_empty() {
            info!("[run {}] No recipes in the response", run);
            self.finish(run, RunState::Empty);
            return Ok(RunOutcome::Empty);
        }

        self.transition(run, RunState::Parsed);
        info!("[run {}] Found {} recipe idea(s)", run, records.len());
        self.emit(RunEvent::Parsed(records.clone()));

        self.transition(run, RunState::Enriching);
        let queries: Vec<String> = records.iter().map(|r| r.title.clone()).collect();

        let batch = match self.enricher.lookup_all(&queries).await {
            Ok(images) => {
                let found = images.iter().filter(|i| i.is_some()).count();
                if found < images.len() {
                    warn!(
                        "[run {}] {} of {} recipes have no image",
                        run,
                        images.len() - found,
                        images.len()
                    );
                }
                EnrichedBatch {
                    recipes: merge_images(records, images),
                    degraded: None,
                }
            }
            Err(fault) => {
                let message = format!("Could not load recipe images: {}", fault);
                warn!("[run {}] {}", run, message);
                self.emit(RunEvent::EnrichmentDegraded(message.clone()));
                EnrichedBatch {
                    recipes: records,
                    degraded: Some(message),
                }
            }
        };

        self.finish(run, RunState::Ready);
        Ok(RunOutcome::Ready(batch))
    }

    fn transition(&mut self, run: u64, next: RunState) {
        debug!("[run {}] {:?} -> {:?}", run, self.state, next);
        self.state = next;
        self.emit(RunEvent::State(next));
    }

    fn finish(&mut self, run: u64, terminal: RunState) {
        self.transition(run, terminal);
        self.transition(run, RunState::Idle);
    }

    fn emit(&self, event: RunEvent) {
        if let Some(events) = &self.events {
            // A caller that dropped its receiver just stops listening
            let _ = events.send(event);
        }
    }
}
