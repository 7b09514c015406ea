//! Cheap candidate filtering applied before any detail fetch is spent.

use placeleads_core::SearchConfiguration;

use crate::types::{LegacyPlace, Place};

/// Provider value of an open, operating business.
pub const OPERATIONAL: &str = "OPERATIONAL";

/// The facts the prefilter needs, borrowed from either response shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateFacts<'a> {
    pub operational_status: Option<&'a str>,
    pub review_count: Option<u32>,
}

impl<'a> From<&'a LegacyPlace> for CandidateFacts<'a> {
    fn from(place: &'a LegacyPlace) -> Self {
        Self {
            operational_status: place.business_status.as_deref(),
            review_count: place.user_ratings_total,
        }
    }
}

impl<'a> From<&'a Place> for CandidateFacts<'a> {
    fn from(place: &'a Place) -> Self {
        Self {
            operational_status: place.business_status.as_deref(),
            review_count: place.user_rating_count,
        }
    }
}

/// `true` only for an explicit operational status; absent counts as not
/// operational.
#[must_use]
pub fn is_operational(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.trim().eq_ignore_ascii_case(OPERATIONAL))
}

/// Rejects a candidate iff it violates at least one configured bound:
/// the operational-only filter, or the inclusive review-count range
/// (a missing count is treated as zero).
#[must_use]
pub fn is_candidate_acceptable(facts: &CandidateFacts<'_>, config: &SearchConfiguration) -> bool {
    if config.operational_only && !is_operational(facts.operational_status) {
        return false;
    }
    let reviews = facts.review_count.unwrap_or(0);
    reviews >= config.min_reviews && reviews <= config.max_reviews
}
