pub mod client;
pub mod enrich;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod pagination;
pub mod pipeline;
pub mod prefilter;
pub mod provider;
pub mod rank;
pub mod strategy;
pub mod types;
pub mod warning;

#[cfg(test)]
mod fake;

pub use client::{PlacesClient, DEFAULT_LEGACY_BASE_URL, DEFAULT_PLACES_BASE_URL};
pub use enrich::{enrich_candidate, enrich_candidates, EnrichedBatch};
pub use error::{PlacesError, SearchError};
pub use fields::{FieldMask, PlaceField};
pub use normalize::{normalize, RawPlace};
pub use pagination::{collect_candidates, CollectedCandidates, PagingPolicy};
pub use pipeline::{run_search, SearchReport};
pub use prefilter::{is_candidate_acceptable, is_operational, CandidateFacts};
pub use provider::PlacesProvider;
pub use rank::finalize;
pub use strategy::{select_strategy, SearchPlan, Strategy};
pub use warning::SearchWarning;
