//! Chooses between the single-shot search and paginate-then-enrich.

use placeleads_core::{DataTier, SearchConfiguration};

use crate::fields::{FieldMask, PlaceField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One single-shot search call, no pagination or detail fetches.
    Simple,
    /// Paged candidate collection, prefilter, then per-candidate details.
    Complex,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Simple => write!(f, "simple"),
            Strategy::Complex => write!(f, "complex"),
        }
    }
}

/// The path and field masks a search will use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub strategy: Strategy,
    pub tier: DataTier,
    /// Mask for the single-shot search.
    pub search_fields: FieldMask,
    /// Mask for each detail fetch on the complex path.
    pub detail_fields: FieldMask,
}

/// Pure function of the configuration: same input, same plan.
#[must_use]
pub fn select_strategy(config: &SearchConfiguration) -> SearchPlan {
    let strategy = if config.is_complex() {
        Strategy::Complex
    } else {
        Strategy::Simple
    };
    let tier = config.data_tier;
    let search_fields = FieldMask::for_tier(tier);

    // The website filter runs on the detail result, so a lean fetch still
    // needs the website field when that filter is on.
    let detail_fields = if config.exclude_has_website {
        FieldMask::for_tier(tier).with(PlaceField::WebsiteUri)
    } else {
        FieldMask::for_tier(tier)
    };

    SearchPlan {
        strategy,
        tier,
        search_fields,
        detail_fields,
    }
}
