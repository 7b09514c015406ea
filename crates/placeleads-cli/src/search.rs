//! The `search` command: run the pipeline and replace the working set.

use std::time::Duration;

use anyhow::Context;
use placeleads_core::{
    AppConfig, BusinessLead, DataTier, SearchConfiguration, SearchTerms, WorkingSet,
    DEFAULT_MAX_REVIEWS, DEFAULT_TARGET_COUNT,
};
use placeleads_places::{run_search, PagingPolicy, PlacesClient};

use crate::store::LeadStore;

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub(crate) struct SearchArgs {
    /// Location text, e.g. "Austin, TX". Defaults to the last search.
    #[arg(long)]
    pub location: Option<String>,
    /// Business category, e.g. "bakery". Defaults to the last search.
    #[arg(long)]
    pub category: Option<String>,
    /// Number of leads wanted.
    #[arg(long, default_value_t = DEFAULT_TARGET_COUNT)]
    pub target: usize,
    #[arg(long, default_value_t = 0)]
    pub min_reviews: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_REVIEWS)]
    pub max_reviews: u32,
    /// Drop businesses that already list a website.
    #[arg(long)]
    pub exclude_has_website: bool,
    /// Keep businesses that are not currently operational.
    #[arg(long)]
    pub include_closed: bool,
    /// Field tier to request: `lean` or `rich`.
    #[arg(long, default_value_t = DataTier::Rich)]
    pub tier: DataTier,
}

/// Builds the search input from flags, falling back to the last-used
/// location and category.
///
/// # Errors
///
/// Returns an error if location or category is missing from both the flags
/// and the working set, or if the bounds are invalid.
pub(crate) fn build_configuration(
    args: &SearchArgs,
    working_set: &WorkingSet,
    max_target_count: usize,
) -> anyhow::Result<SearchConfiguration> {
    let last = working_set.last_search();
    let location = args
        .location
        .clone()
        .or_else(|| last.map(|t| t.location.clone()))
        .context("no location given and no previous search to reuse; pass --location")?;
    let category = args
        .category
        .clone()
        .or_else(|| last.map(|t| t.category.clone()))
        .context("no category given and no previous search to reuse; pass --category")?;

    let config = SearchConfiguration {
        data_tier: args.tier,
        target_count: args.target,
        min_reviews: args.min_reviews,
        max_reviews: args.max_reviews,
        exclude_has_website: args.exclude_has_website,
        operational_only: !args.include_closed,
        ..SearchConfiguration::new(location, category)
    };
    Ok(config.validated(max_target_count)?)
}

/// Run a search and replace the working set with its results.
///
/// # Errors
///
/// Returns an error if the search input is invalid, the credential is not
/// configured, the provider fails on its first call, or the store cannot be
/// written.
pub(crate) async fn run_search_command(
    config: &AppConfig,
    store: &LeadStore,
    working_set: &mut WorkingSet,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let search = build_configuration(args, working_set, config.max_target_count)?;
    let api_key = config
        .places_api_key
        .as_deref()
        .context("PLACES_API_KEY is not set")?;

    let client = PlacesClient::with_base_urls(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.legacy_base_url,
        &config.places_base_url,
    )?;
    let policy = PagingPolicy::with_page_delay(Duration::from_millis(config.page_delay_ms));

    let report = run_search(&client, &search, &policy).await?;
    let warnings = report.warnings.len();
    let carried = apply_search_results(store, working_set, search.terms(), report.leads)?;

    if working_set.is_empty() {
        println!("no leads found for {}", search.query_text());
    } else {
        crate::leads::print_leads(working_set.leads());
        println!(
            "{} leads ({} strategy, {} tier); {carried} kept earlier notes",
            working_set.len(),
            report.plan.strategy,
            report.plan.tier
        );
    }
    if warnings > 0 {
        println!("{warnings} warnings; rerun with RUST_LOG=warn for details");
    }
    Ok(())
}

/// Replaces the working set with `leads` and saves it when the result is
/// non-empty. An empty result leaves the store file untouched. Returns how
/// many leads kept status and notes from the previous set.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub(crate) fn apply_search_results(
    store: &LeadStore,
    working_set: &mut WorkingSet,
    terms: SearchTerms,
    leads: Vec<BusinessLead>,
) -> anyhow::Result<usize> {
    let carried = working_set.replace_with_search(terms, leads);
    if working_set.is_empty() {
        tracing::info!(store = %store.path().display(), "empty result; store left unchanged");
    } else {
        store.save(working_set)?;
    }
    Ok(carried)
}
