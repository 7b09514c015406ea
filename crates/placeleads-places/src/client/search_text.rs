//! Single-shot `places:searchText` on the modern places host.

use crate::error::PlacesError;
use crate::fields::FieldMask;
use crate::types::{ErrorEnvelope, Place, SearchTextResponse};

use super::{redact, PlacesClient};

pub(super) const SEARCH_TEXT_ENDPOINT: &str = "v1/places:searchText";

/// Largest `maxResultCount` the endpoint accepts.
pub(super) const MAX_RESULT_COUNT: usize = 20;

impl PlacesClient {
    /// Runs a single-shot text search returning up to `max_results` places
    /// (capped at 20) with only the masked fields populated.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] when the provider returns an error body
    ///   (bad credential, quota, invalid argument).
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx status without a
    ///   parseable error body.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_text(
        &self,
        query: &str,
        fields: &FieldMask,
        max_results: usize,
    ) -> Result<Vec<Place>, PlacesError> {
        let url = self.places_url(SEARCH_TEXT_ENDPOINT)?;
        let body = serde_json::json!({
            "textQuery": query,
            "maxResultCount": max_results.clamp(1, MAX_RESULT_COUNT),
        });

        let response = self
            .client
            .post(url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", fields.search_header())
            .json(&body)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        let text = response.text().await.map_err(redact)?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => PlacesError::Api {
                    status: envelope
                        .error
                        .status
                        .unwrap_or_else(|| envelope.error.code.to_string()),
                    message: envelope.error.message,
                },
                Err(_) => PlacesError::UnexpectedStatus {
                    status: status.as_u16(),
                    endpoint: SEARCH_TEXT_ENDPOINT.to_owned(),
                },
            });
        }

        let parsed: SearchTextResponse =
            serde_json::from_str(&text).map_err(|e| PlacesError::Deserialize {
                context: format!("searchText(query={query})"),
                source: e,
            })?;

        tracing::debug!(query, results = parsed.places.len(), "single-shot search fetched");
        Ok(parsed.places)
    }
}
