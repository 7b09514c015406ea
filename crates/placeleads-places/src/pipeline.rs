//! The acquisition pipeline: strategy, collection, enrichment, ranking.

use placeleads_core::{
    BusinessLead, SearchConfiguration, PROVIDER_MAX_TARGET_COUNT, SINGLE_SHOT_MAX_RESULTS,
};

use crate::enrich::enrich_candidates;
use crate::error::SearchError;
use crate::normalize::{normalize, RawPlace};
use crate::pagination::{collect_candidates, PagingPolicy};
use crate::prefilter::{is_candidate_acceptable, is_operational, CandidateFacts};
use crate::provider::PlacesProvider;
use crate::rank::finalize;
use crate::strategy::{select_strategy, SearchPlan, Strategy};
use crate::warning::SearchWarning;

/// Outcome of [`run_search`].
#[derive(Debug)]
pub struct SearchReport {
    pub plan: SearchPlan,
    /// Ranked, deduplicated leads with default CRM state.
    pub leads: Vec<BusinessLead>,
    /// Raw provider records examined before any filtering.
    pub candidates_considered: usize,
    /// Records dropped by a filter after they were fetched.
    pub excluded: usize,
    pub warnings: Vec<SearchWarning>,
}

/// Runs one search for `config` against `provider`.
///
/// The simple path makes a single search call and applies the operational
/// filter to what comes back. The complex path pages through candidates
/// with the prefilter applied per page, then fetches details for the
/// survivors concurrently. Both end in [`finalize`].
///
/// # Errors
///
/// - [`SearchError::Config`] if the configuration is invalid. No request is
///   made.
/// - [`SearchError::Provider`] if the single-shot call or the first page
///   fails. Later faults are returned as warnings in the report.
pub async fn run_search<P>(
    provider: &P,
    config: &SearchConfiguration,
    policy: &PagingPolicy,
) -> Result<SearchReport, SearchError>
where
    P: PlacesProvider + ?Sized,
{
    let config = config.clone().validated(PROVIDER_MAX_TARGET_COUNT)?;
    let plan = select_strategy(&config);
    let query = config.query_text();

    tracing::info!(
        query = %query,
        strategy = %plan.strategy,
        tier = %plan.tier,
        target = config.target_count,
        "starting search"
    );

    let mut report = match plan.strategy {
        Strategy::Simple => run_simple(provider, &config, &query, plan).await?,
        Strategy::Complex => run_complex(provider, &config, &query, plan, policy).await?,
    };

    report.leads = finalize(report.leads);
    report.leads.truncate(config.target_count);

    tracing::info!(
        query = %query,
        leads = report.leads.len(),
        considered = report.candidates_considered,
        excluded = report.excluded,
        warnings = report.warnings.len(),
        "search complete"
    );
    Ok(report)
}

async fn run_simple<P>(
    provider: &P,
    config: &SearchConfiguration,
    query: &str,
    plan: SearchPlan,
) -> Result<SearchReport, SearchError>
where
    P: PlacesProvider + ?Sized,
{
    let max_results = config.target_count.min(SINGLE_SHOT_MAX_RESULTS);
    let places = provider
        .search_text(query, &plan.search_fields, max_results)
        .await?;

    let candidates_considered = places.len();
    let mut leads = Vec::with_capacity(places.len());
    let mut excluded = 0;
    let mut warnings = Vec::new();

    // Review bounds are left at their defaults on this path, so only the
    // operational filter applies.
    for place in places {
        if config.operational_only && !is_operational(place.business_status.as_deref()) {
            excluded += 1;
            continue;
        }
        let raw = RawPlace::Modern(place);
        let place_id = raw.place_id().unwrap_or("<unknown>").to_string();
        match normalize(raw, plan.tier) {
            Ok(lead) => leads.push(lead),
            Err(e) => {
                tracing::warn!(place_id = %place_id, error = %e, "skipping record");
                warnings.push(SearchWarning::RecordSkipped {
                    place_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(SearchReport {
        plan,
        leads,
        candidates_considered,
        excluded,
        warnings,
    })
}

async fn run_complex<P>(
    provider: &P,
    config: &SearchConfiguration,
    query: &str,
    plan: SearchPlan,
    policy: &PagingPolicy,
) -> Result<SearchReport, SearchError>
where
    P: PlacesProvider + ?Sized,
{
    let collected = collect_candidates(
        provider,
        query,
        |candidate| is_candidate_acceptable(&CandidateFacts::from(candidate), config),
        config.target_count,
        policy,
    )
    .await?;

    let batch = enrich_candidates(
        provider,
        &collected.candidates,
        &plan.detail_fields,
        plan.tier,
        config.exclude_has_website,
    )
    .await;

    let mut warnings = collected.warnings;
    warnings.extend(batch.warnings);

    Ok(SearchReport {
        plan,
        leads: batch.leads,
        candidates_considered: collected.raw_seen,
        excluded: batch.excluded,
        warnings,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
