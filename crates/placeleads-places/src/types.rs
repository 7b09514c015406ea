//! Provider response types.
//!
//! Two response families exist and they do not share field names:
//!
//! ### Legacy web-service shape (snake_case)
//! Returned by the paged text search and the per-item details endpoint.
//! Every response carries a top-level `"status"` string; `"OK"` and
//! `"ZERO_RESULTS"` are successes, anything else is an error with an optional
//! `"error_message"`. Text-search pages hold up to 20 `results` and a
//! `next_page_token` that only becomes valid a short while after it is issued.
//!
//! ### Modern shape (camelCase)
//! Returned by the single-shot `places:searchText` endpoint. The display name
//! is nested (`displayName.text`), the list key `places` is omitted entirely
//! when nothing matches, and errors arrive as a non-2xx status with an
//! `{"error": {...}}` body.
//!
//! All fields are optional: a field mask decides which ones are present.

use serde::Deserialize;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// A place in the legacy shape, as a text-search candidate or a details result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyPlace {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// `"OPERATIONAL"`, `"CLOSED_TEMPORARILY"` or `"CLOSED_PERMANENTLY"`.
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    /// Canonical maps page for the place.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub geometry: Option<LegacyGeometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyGeometry {
    pub location: LegacyLatLng,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LegacyLatLng {
    pub lat: f64,
    pub lng: f64,
}

/// `GET maps/api/place/textsearch/json`
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<LegacyPlace>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `GET maps/api/place/details/json`
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<LegacyPlace>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A place in the modern shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub national_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub google_maps_uri: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// `POST v1/places:searchText`
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Error body of the modern endpoints.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// One page of paged text-search results with its continuation cursor.
#[derive(Debug, Clone, Default)]
pub struct TextSearchPage {
    pub results: Vec<LegacyPlace>,
    pub next_page_token: Option<String>,
}
