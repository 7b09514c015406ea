//! Per-invocation search input.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Hard provider ceiling for a search's target lead count.
pub const PROVIDER_MAX_TARGET_COUNT: usize = 100;

/// Largest target the single-shot search can satisfy in one call.
pub const SINGLE_SHOT_MAX_RESULTS: usize = 20;

pub const DEFAULT_TARGET_COUNT: usize = 20;
pub const DEFAULT_MAX_REVIEWS: u32 = 10_000;

/// Which field set is requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTier {
    /// Name, address, identifier, maps link and operational status only.
    Lean,
    /// Lean fields plus website, phone, rating and review count.
    #[default]
    Rich,
}

impl std::fmt::Display for DataTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataTier::Lean => write!(f, "lean"),
            DataTier::Rich => write!(f, "rich"),
        }
    }
}

impl std::str::FromStr for DataTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lean" => Ok(DataTier::Lean),
            "rich" => Ok(DataTier::Rich),
            _ => Err(CoreError::InvalidTier(s.to_string())),
        }
    }
}

/// Location and category text of a search, remembered between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerms {
    pub location: String,
    pub category: String,
}

/// Immutable input to one run of the acquisition pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfiguration {
    pub location_text: String,
    pub category_text: String,
    pub data_tier: DataTier,
    pub target_count: usize,
    /// Inclusive lower review-count bound.
    pub min_reviews: u32,
    /// Inclusive upper review-count bound.
    pub max_reviews: u32,
    pub exclude_has_website: bool,
    pub operational_only: bool,
}

impl SearchConfiguration {
    /// A configuration with every filter at its default.
    #[must_use]
    pub fn new(location_text: impl Into<String>, category_text: impl Into<String>) -> Self {
        Self {
            location_text: location_text.into(),
            category_text: category_text.into(),
            data_tier: DataTier::default(),
            target_count: DEFAULT_TARGET_COUNT,
            min_reviews: 0,
            max_reviews: DEFAULT_MAX_REVIEWS,
            exclude_has_website: false,
            operational_only: true,
        }
    }

    /// Checks required fields and bounds, trims the query fragments and
    /// clamps `target_count` into `1..=max_target_count` (itself never above
    /// [`PROVIDER_MAX_TARGET_COUNT`]).
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingField`] when location or category is blank.
    /// - [`CoreError::InvalidReviewBounds`] when `min_reviews > max_reviews`.
    pub fn validated(mut self, max_target_count: usize) -> Result<Self, CoreError> {
        self.location_text = self.location_text.trim().to_string();
        self.category_text = self.category_text.trim().to_string();

        if self.location_text.is_empty() {
            return Err(CoreError::MissingField("location"));
        }
        if self.category_text.is_empty() {
            return Err(CoreError::MissingField("category"));
        }
        if self.min_reviews > self.max_reviews {
            return Err(CoreError::InvalidReviewBounds {
                min: self.min_reviews,
                max: self.max_reviews,
            });
        }

        let cap = max_target_count.clamp(1, PROVIDER_MAX_TARGET_COUNT);
        self.target_count = self.target_count.clamp(1, cap);
        Ok(self)
    }

    /// Free-text query sent to the provider.
    #[must_use]
    pub fn query_text(&self) -> String {
        format!("{} in {}", self.category_text, self.location_text)
    }

    /// `true` when any filter requires the paginate-then-enrich path.
    #[must_use]
    pub fn is_complex(&self) -> bool {
        self.target_count > SINGLE_SHOT_MAX_RESULTS
            || self.min_reviews > 0
            || self.max_reviews < DEFAULT_MAX_REVIEWS
            || self.exclude_has_website
            || !self.operational_only
    }

    #[must_use]
    pub fn terms(&self) -> SearchTerms {
        SearchTerms {
            location: self.location_text.clone(),
            category: self.category_text.clone(),
        }
    }
}
