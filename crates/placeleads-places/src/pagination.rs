//! Cursor-driven candidate collection over the paged text search.
//!
//! The provider hands back a `next_page_token` with each page; a token is not
//! valid until a short while after it is issued, so every continuation
//! request waits [`PagingPolicy::page_delay`] first. Collection stops as soon
//! as enough acceptable candidates are held, the cursor runs out, the raw
//! result cap is reached, or the page guard trips.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::PlacesError;
use crate::provider::PlacesProvider;
use crate::types::LegacyPlace;
use crate::warning::SearchWarning;

/// Delay before each continuation request.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// The provider never returns more than this many raw results for one query.
pub const RAW_CANDIDATE_CAP: usize = 60;

/// Hard bound on requests for one query, independent of the cursor.
pub const DEFAULT_MAX_PAGES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingPolicy {
    pub page_delay: Duration,
    pub raw_candidate_cap: usize,
    pub max_pages: usize,
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self {
            page_delay: DEFAULT_PAGE_DELAY,
            raw_candidate_cap: RAW_CANDIDATE_CAP,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl PagingPolicy {
    /// Default policy with a custom continuation delay.
    #[must_use]
    pub fn with_page_delay(page_delay: Duration) -> Self {
        Self {
            page_delay,
            ..Self::default()
        }
    }
}

/// Outcome of [`collect_candidates`].
#[derive(Debug, Default)]
pub struct CollectedCandidates {
    /// Accepted candidates in provider order, at most `target_count` long.
    pub candidates: Vec<LegacyPlace>,
    pub pages_fetched: usize,
    /// Raw results seen across all pages, before filtering.
    pub raw_seen: usize,
    pub warnings: Vec<SearchWarning>,
}

/// Pages through the text search for `query`, keeping candidates for which
/// `accept` returns `true` until `target_count` are held.
///
/// Candidates without a place identifier are dropped, and an identifier seen
/// on an earlier page is not kept twice. A zero-result page ends collection
/// without waiting.
///
/// # Errors
///
/// Returns the provider error if the first page fails. A failure on any
/// later page ends collection with the candidates gathered so far and a
/// [`SearchWarning::PaginationStopped`].
pub async fn collect_candidates<P, F>(
    provider: &P,
    query: &str,
    mut accept: F,
    target_count: usize,
    policy: &PagingPolicy,
) -> Result<CollectedCandidates, PlacesError>
where
    P: PlacesProvider + ?Sized,
    F: FnMut(&LegacyPlace) -> bool,
{
    let mut collected = CollectedCandidates::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut page_token: Option<String> = None;

    if target_count == 0 {
        return Ok(collected);
    }

    loop {
        if collected.pages_fetched >= policy.max_pages {
            tracing::warn!(
                query,
                max_pages = policy.max_pages,
                "page limit reached with more results available"
            );
            collected.warnings.push(SearchWarning::PageLimitReached {
                max_pages: policy.max_pages,
            });
            break;
        }

        if page_token.is_some() && !policy.page_delay.is_zero() {
            tokio::time::sleep(policy.page_delay).await;
        }

        let page_number = collected.pages_fetched + 1;
        let page = match provider
            .text_search_page(query, page_token.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) if collected.pages_fetched == 0 => return Err(e),
            Err(e) => {
                tracing::warn!(
                    query,
                    page = page_number,
                    error = %e,
                    "continuation page failed; keeping partial results"
                );
                collected.warnings.push(SearchWarning::PaginationStopped {
                    page: page_number,
                    reason: e.to_string(),
                });
                break;
            }
        };
        collected.pages_fetched = page_number;

        if page.results.is_empty() {
            tracing::debug!(query, page = page_number, "empty page; stopping");
            break;
        }
        collected.raw_seen += page.results.len();

        for place in page.results {
            let Some(id) = place.place_id.as_deref() else {
                tracing::debug!(query, "dropping candidate without place_id");
                continue;
            };
            if !seen.insert(id.to_owned()) {
                continue;
            }
            if accept(&place) {
                collected.candidates.push(place);
            }
        }

        tracing::debug!(
            query,
            page = page_number,
            accepted = collected.candidates.len(),
            raw_seen = collected.raw_seen,
            "collected page"
        );

        if collected.candidates.len() >= target_count
            || collected.raw_seen >= policy.raw_candidate_cap
        {
            break;
        }
        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    collected.candidates.truncate(target_count);
    Ok(collected)
}
