//! Per-candidate detail fetches for the complex path.

use futures::future::join_all;
use placeleads_core::{BusinessLead, DataTier};

use crate::error::PlacesError;
use crate::fields::FieldMask;
use crate::normalize::{normalize, RawPlace};
use crate::provider::PlacesProvider;
use crate::types::LegacyPlace;
use crate::warning::SearchWarning;

/// Result of enriching a batch of candidates.
#[derive(Debug, Default)]
pub struct EnrichedBatch {
    /// Leads in candidate order.
    pub leads: Vec<BusinessLead>,
    /// Candidates dropped by the website filter.
    pub excluded: usize,
    pub warnings: Vec<SearchWarning>,
}

/// Fetches `fields` for one candidate and normalizes the result.
///
/// Identity fields missing from the detail response are taken from the
/// candidate. Returns `Ok(None)` when `exclude_has_website` is set and the
/// place has a non-empty website.
///
/// # Errors
///
/// Returns the provider error if the detail fetch fails, or
/// [`PlacesError::Normalization`] if the merged record lacks a name or
/// address.
pub async fn enrich_candidate<P>(
    provider: &P,
    candidate: &LegacyPlace,
    fields: &FieldMask,
    tier: DataTier,
    exclude_has_website: bool,
) -> Result<Option<BusinessLead>, PlacesError>
where
    P: PlacesProvider + ?Sized,
{
    let place_id = candidate
        .place_id
        .as_deref()
        .ok_or_else(|| PlacesError::Normalization {
            place_id: "<unknown>".to_string(),
            reason: "candidate has no place_id".to_string(),
        })?;

    let mut detail = provider.place_details(place_id, fields).await?;
    if detail.place_id.is_none() {
        detail.place_id = Some(place_id.to_string());
    }
    if detail.name.is_none() {
        detail.name.clone_from(&candidate.name);
    }
    if detail.formatted_address.is_none() {
        detail.formatted_address.clone_from(&candidate.formatted_address);
    }

    if exclude_has_website
        && detail
            .website
            .as_deref()
            .is_some_and(|w| !w.trim().is_empty())
    {
        tracing::debug!(place_id, "dropping candidate with website");
        return Ok(None);
    }

    normalize(RawPlace::Legacy(detail), tier).map(Some)
}

/// Enriches every candidate concurrently and waits for all of them to
/// settle. A failed fetch drops only that candidate and is reported as a
/// warning; the batch itself never fails.
pub async fn enrich_candidates<P>(
    provider: &P,
    candidates: &[LegacyPlace],
    fields: &FieldMask,
    tier: DataTier,
    exclude_has_website: bool,
) -> EnrichedBatch
where
    P: PlacesProvider + ?Sized,
{
    let outcomes = join_all(
        candidates
            .iter()
            .map(|c| enrich_candidate(provider, c, fields, tier, exclude_has_website)),
    )
    .await;

    let mut batch = EnrichedBatch::default();
    for (candidate, outcome) in candidates.iter().zip(outcomes) {
        let place_id = candidate.place_id.clone().unwrap_or_default();
        match outcome {
            Ok(Some(lead)) => batch.leads.push(lead),
            Ok(None) => batch.excluded += 1,
            Err(PlacesError::Normalization { reason, .. }) => {
                tracing::warn!(place_id = %place_id, %reason, "skipping record");
                batch
                    .warnings
                    .push(SearchWarning::RecordSkipped { place_id, reason });
            }
            Err(e) => {
                tracing::warn!(place_id = %place_id, error = %e, "detail fetch failed");
                batch.warnings.push(SearchWarning::DetailFetchFailed {
                    place_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        candidates = candidates.len(),
        enriched = batch.leads.len(),
        excluded = batch.excluded,
        failed = batch.warnings.len(),
        "enrichment settled"
    );
    batch
}
