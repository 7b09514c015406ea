//! Paged text search and per-item details on the legacy web-service host.

use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::fields::FieldMask;
use crate::types::{
    DetailsResponse, LegacyPlace, TextSearchPage, TextSearchResponse, STATUS_OK,
    STATUS_ZERO_RESULTS,
};

use super::{redact, PlacesClient};

pub(super) const TEXT_SEARCH_ENDPOINT: &str = "maps/api/place/textsearch/json";
pub(super) const DETAILS_ENDPOINT: &str = "maps/api/place/details/json";

impl PlacesClient {
    /// Fetches one page of text-search candidates.
    ///
    /// The first page is requested by `query`; continuation pages by
    /// `page_token` alone. `ZERO_RESULTS` yields an empty page.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] for any status other than `OK`/`ZERO_RESULTS`
    ///   (including `INVALID_REQUEST` for a cursor that is not valid yet).
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn text_search_page(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchPage, PlacesError> {
        let params: Vec<(&str, &str)> = match page_token {
            Some(token) => vec![("pagetoken", token)],
            None => vec![("query", query)],
        };

        let response: TextSearchResponse = self.get_legacy(TEXT_SEARCH_ENDPOINT, &params).await?;
        check_legacy_status(&response.status, response.error_message.as_deref())?;

        tracing::debug!(
            query,
            continuation = page_token.is_some(),
            results = response.results.len(),
            has_next = response.next_page_token.is_some(),
            "text search page fetched"
        );

        Ok(TextSearchPage {
            results: response.results,
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetches the masked fields for one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] for a non-`OK` status (e.g. `NOT_FOUND`) or an
    ///   `OK` response without a `result`.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        fields: &FieldMask,
    ) -> Result<LegacyPlace, PlacesError> {
        let field_param = fields.legacy_param();
        let response: DetailsResponse = self
            .get_legacy(
                DETAILS_ENDPOINT,
                &[("place_id", place_id), ("fields", &field_param)],
            )
            .await?;

        if response.status != STATUS_OK {
            return Err(api_error(&response.status, response.error_message.as_deref()));
        }

        response.result.ok_or_else(|| PlacesError::Api {
            status: response.status,
            message: format!("details response for {place_id} has no result"),
        })
    }

    /// Sends a GET to a legacy endpoint, asserts a 2xx HTTP status and parses
    /// the body.
    async fn get_legacy<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let url = self.legacy_url(endpoint, params)?;
        let response = self.client.get(url).send().await.map_err(redact)?;
        let status = response.status();

        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }

        let body = response.text().await.map_err(redact)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

/// Checks the envelope `"status"` of a legacy search response.
pub(super) fn check_legacy_status(
    status: &str,
    error_message: Option<&str>,
) -> Result<(), PlacesError> {
    if status == STATUS_OK || status == STATUS_ZERO_RESULTS {
        Ok(())
    } else {
        Err(api_error(status, error_message))
    }
}

fn api_error(status: &str, error_message: Option<&str>) -> PlacesError {
    PlacesError::Api {
        status: status.to_owned(),
        message: error_message.unwrap_or("no error message").to_owned(),
    }
}
