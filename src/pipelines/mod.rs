pub mod enrich;
pub mod suggest;

pub use enrich::{merge_images, EnrichmentFault, Enricher, DEFAULT_MAX_CONCURRENT_LOOKUPS};
pub use suggest::{EnrichedBatch, Orchestrator, RunEvent, RunOutcome, RunState};
