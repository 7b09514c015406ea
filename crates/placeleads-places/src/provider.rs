//! The provider seam the search pipeline is written against.
//!
//! [`crate::PlacesClient`] is the HTTP implementation. The pipeline only sees
//! this trait, so it receives its provider session as an explicit handle and
//! can be exercised against an in-memory provider in tests.

use async_trait::async_trait;

use crate::error::PlacesError;
use crate::fields::FieldMask;
use crate::types::{LegacyPlace, Place, TextSearchPage};

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Fetch one page of low-detail text-search results. `page_token` is
    /// `None` for the first page and the previous page's cursor afterwards.
    ///
    /// A zero-match search is `Ok` with an empty page.
    async fn text_search_page(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchPage, PlacesError>;

    /// Fetch exactly the masked fields for one place.
    async fn place_details(
        &self,
        place_id: &str,
        fields: &FieldMask,
    ) -> Result<LegacyPlace, PlacesError>;

    /// Single-shot search returning up to `max_results` places with the
    /// masked fields, without pagination.
    async fn search_text(
        &self,
        query: &str,
        fields: &FieldMask,
        max_results: usize,
    ) -> Result<Vec<Place>, PlacesError>;
}
