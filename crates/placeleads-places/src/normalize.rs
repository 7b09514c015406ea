//! Normalization from provider response shapes to [`BusinessLead`].
//!
//! The two provider shapes are kept apart as a tagged union, [`RawPlace`],
//! with one mapping function per shape.

use placeleads_core::{BusinessLead, DataTier, LeadStatus};

use crate::error::PlacesError;
use crate::types::{LegacyPlace, Place};

/// A provider record awaiting normalization.
#[derive(Debug, Clone)]
pub enum RawPlace {
    /// Legacy web-service shape (text-search candidate or details result).
    Legacy(LegacyPlace),
    /// Modern shape from the single-shot search.
    Modern(Place),
}

impl RawPlace {
    #[must_use]
    pub fn place_id(&self) -> Option<&str> {
        match self {
            RawPlace::Legacy(p) => p.place_id.as_deref(),
            RawPlace::Modern(p) => p.id.as_deref(),
        }
    }
}

/// Normalizes a provider record into a [`BusinessLead`] with default CRM
/// state.
///
/// Under [`DataTier::Lean`] the rich fields (`website`, `phone`, `rating`,
/// `review_count`) are left `None` even if the provider sent them.
///
/// # Errors
///
/// Returns [`PlacesError::Normalization`] if the record has no name or no
/// address.
pub fn normalize(raw: RawPlace, tier: DataTier) -> Result<BusinessLead, PlacesError> {
    let lead = match raw {
        RawPlace::Legacy(place) => normalize_legacy(place)?,
        RawPlace::Modern(place) => normalize_modern(place)?,
    };
    Ok(apply_tier(lead, tier))
}

fn normalize_legacy(place: LegacyPlace) -> Result<BusinessLead, PlacesError> {
    let external_id = non_empty(place.place_id);
    let name = require(non_empty(place.name), external_id.as_deref(), "name")?;
    let address = require(
        non_empty(place.formatted_address),
        external_id.as_deref(),
        "formatted_address",
    )?;
    let maps_link = non_empty(place.url).or_else(|| external_id.as_deref().map(maps_link_for));

    Ok(BusinessLead {
        name,
        address,
        website: non_empty(place.website),
        // International form first: it keeps the country code that
        // messaging links need.
        phone: non_empty(place.international_phone_number)
            .or_else(|| non_empty(place.formatted_phone_number)),
        rating: place.rating,
        review_count: place.user_ratings_total,
        external_id,
        maps_link,
        status: LeadStatus::Pending,
        notes: String::new(),
    })
}

fn normalize_modern(place: Place) -> Result<BusinessLead, PlacesError> {
    let external_id = non_empty(place.id);
    let name = require(
        non_empty(place.display_name.map(|d| d.text)),
        external_id.as_deref(),
        "displayName",
    )?;
    let address = require(
        non_empty(place.formatted_address),
        external_id.as_deref(),
        "formattedAddress",
    )?;
    let maps_link =
        non_empty(place.google_maps_uri).or_else(|| external_id.as_deref().map(maps_link_for));

    Ok(BusinessLead {
        name,
        address,
        website: non_empty(place.website_uri),
        phone: non_empty(place.international_phone_number)
            .or_else(|| non_empty(place.national_phone_number)),
        rating: place.rating,
        review_count: place.user_rating_count,
        external_id,
        maps_link,
        status: LeadStatus::Pending,
        notes: String::new(),
    })
}

fn apply_tier(mut lead: BusinessLead, tier: DataTier) -> BusinessLead {
    if tier == DataTier::Lean {
        lead.website = None;
        lead.phone = None;
        lead.rating = None;
        lead.review_count = None;
    }
    lead
}

/// Maps page URL derived from a place identifier.
#[must_use]
pub fn maps_link_for(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{place_id}")
}

/// Treats empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn require(
    value: Option<String>,
    place_id: Option<&str>,
    field: &str,
) -> Result<String, PlacesError> {
    value.ok_or_else(|| PlacesError::Normalization {
        place_id: place_id.unwrap_or("<unknown>").to_owned(),
        reason: format!("missing {field}"),
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
