//! Domain types shared by the placeleads crates.
//!
//! Holds the canonical [`BusinessLead`] record, the per-invocation
//! [`SearchConfiguration`], the CRM-owning [`WorkingSet`], and the
//! environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod lead;
pub mod search;
pub mod working_set;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{BusinessLead, LeadStatus};
pub use search::{
    DataTier, SearchConfiguration, SearchTerms, DEFAULT_MAX_REVIEWS, DEFAULT_TARGET_COUNT,
    PROVIDER_MAX_TARGET_COUNT, SINGLE_SHOT_MAX_RESULTS,
};
pub use working_set::WorkingSet;

use thiserror::Error;

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised by domain validation and working-set edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("search field `{0}` is required")]
    MissingField(&'static str),

    #[error("invalid review bounds: min {min} exceeds max {max}")]
    InvalidReviewBounds { min: u32, max: u32 },

    #[error("invalid lead status: {0}")]
    InvalidStatus(String),

    #[error("invalid data tier: {0} (expected `lean` or `rich`)")]
    InvalidTier(String),

    #[error("row {row} is out of range (working set has {len} leads)")]
    RowOutOfRange { row: usize, len: usize },
}
