//! HTTP client for the places provider.
//!
//! Wraps `reqwest` with provider-specific status handling, credential
//! management and typed response deserialization. Two hosts are involved:
//! the legacy web-service host (paged text search, per-item details) and the
//! modern places host (single-shot `searchText`).

mod legacy;
mod search_text;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::fields::FieldMask;
use crate::provider::PlacesProvider;
use crate::types::{LegacyPlace, Place, TextSearchPage};

pub const DEFAULT_LEGACY_BASE_URL: &str = "https://maps.googleapis.com/";
pub const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com/";

/// Explicit provider session handle.
///
/// Construction validates the credential and base URLs; a constructed client
/// is ready to serve a search. Pass it by reference into
/// [`crate::run_search`]. Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_urls`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    legacy_base: Url,
    places_base: Url,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("api_key", &"[redacted]")
            .field("legacy_base", &self.legacy_base.as_str())
            .field("places_base", &self.places_base.as_str())
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    /// Creates a client pointed at the production provider hosts.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::MissingCredential`] if `api_key` is blank.
    /// - [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_urls(
            api_key,
            timeout_secs,
            user_agent,
            DEFAULT_LEGACY_BASE_URL,
            DEFAULT_PLACES_BASE_URL,
        )
    }

    /// Creates a client with custom hosts (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// - [`PlacesError::MissingCredential`] if `api_key` is blank.
    /// - [`PlacesError::InvalidBaseUrl`] if either base URL does not parse.
    /// - [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn with_base_urls(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        legacy_base_url: &str,
        places_base_url: &str,
    ) -> Result<Self, PlacesError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(PlacesError::MissingCredential);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            legacy_base: parse_base_url(legacy_base_url)?,
            places_base: parse_base_url(places_base_url)?,
        })
    }

    /// Joins `endpoint` onto the legacy host and appends `params` followed by
    /// the credential, percent-encoding every value.
    fn legacy_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = join_endpoint(&self.legacy_base, endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    fn places_url(&self, endpoint: &str) -> Result<Url, PlacesError> {
        join_endpoint(&self.places_base, endpoint)
    }
}

#[async_trait]
impl PlacesProvider for PlacesClient {
    async fn text_search_page(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchPage, PlacesError> {
        PlacesClient::text_search_page(self, query, page_token).await
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &FieldMask,
    ) -> Result<LegacyPlace, PlacesError> {
        PlacesClient::place_details(self, place_id, fields).await
    }

    async fn search_text(
        &self,
        query: &str,
        fields: &FieldMask,
        max_results: usize,
    ) -> Result<Vec<Place>, PlacesError> {
        PlacesClient::search_text(self, query, fields, max_results).await
    }
}

/// Normalise: ensure the base URL ends with exactly one slash so that
/// `Url::join` appends endpoint paths rather than replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, PlacesError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

fn join_endpoint(base: &Url, endpoint: &str) -> Result<Url, PlacesError> {
    base.join(endpoint).map_err(|e| PlacesError::InvalidBaseUrl {
        url: base.to_string(),
        reason: format!("cannot join endpoint '{endpoint}': {e}"),
    })
}

/// Strips the request URL from a transport error; legacy URLs carry the key.
fn redact(err: reqwest::Error) -> PlacesError {
    PlacesError::Http(err.without_url())
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
