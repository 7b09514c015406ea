//! Field masks: which place fields a request asks the provider for.
//!
//! Each [`PlaceField`] maps to one or more tokens in the legacy `fields=`
//! parameter and to paths in the modern `X-Goog-FieldMask` header.

use placeleads_core::DataTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceField {
    Name,
    Address,
    WebsiteUri,
    Phone,
    Rating,
    ReviewCount,
    Location,
    ExternalId,
    MapsLink,
    OperationalStatus,
}

impl PlaceField {
    pub const ALL: [PlaceField; 10] = [
        PlaceField::Name,
        PlaceField::Address,
        PlaceField::WebsiteUri,
        PlaceField::Phone,
        PlaceField::Rating,
        PlaceField::ReviewCount,
        PlaceField::Location,
        PlaceField::ExternalId,
        PlaceField::MapsLink,
        PlaceField::OperationalStatus,
    ];

    /// Fields excluded from lean-tier requests.
    pub const RICH_ONLY: [PlaceField; 4] = [
        PlaceField::WebsiteUri,
        PlaceField::Phone,
        PlaceField::Rating,
        PlaceField::ReviewCount,
    ];

    #[must_use]
    pub fn is_rich_only(self) -> bool {
        Self::RICH_ONLY.contains(&self)
    }

    fn legacy_tokens(self) -> &'static [&'static str] {
        match self {
            PlaceField::Name => &["name"],
            PlaceField::Address => &["formatted_address"],
            PlaceField::WebsiteUri => &["website"],
            PlaceField::Phone => &["formatted_phone_number", "international_phone_number"],
            PlaceField::Rating => &["rating"],
            PlaceField::ReviewCount => &["user_ratings_total"],
            PlaceField::Location => &["geometry"],
            PlaceField::ExternalId => &["place_id"],
            PlaceField::MapsLink => &["url"],
            PlaceField::OperationalStatus => &["business_status"],
        }
    }

    fn modern_paths(self) -> &'static [&'static str] {
        match self {
            PlaceField::Name => &["displayName"],
            PlaceField::Address => &["formattedAddress"],
            PlaceField::WebsiteUri => &["websiteUri"],
            PlaceField::Phone => &["nationalPhoneNumber", "internationalPhoneNumber"],
            PlaceField::Rating => &["rating"],
            PlaceField::ReviewCount => &["userRatingCount"],
            PlaceField::Location => &["location"],
            PlaceField::ExternalId => &["id"],
            PlaceField::MapsLink => &["googleMapsUri"],
            PlaceField::OperationalStatus => &["businessStatus"],
        }
    }
}

/// An ordered, duplicate-free set of [`PlaceField`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMask {
    fields: Vec<PlaceField>,
}

impl FieldMask {
    /// Name, address, location, identifier, maps link and operational status.
    #[must_use]
    pub fn lean() -> Self {
        Self {
            fields: PlaceField::ALL
                .into_iter()
                .filter(|f| !f.is_rich_only())
                .collect(),
        }
    }

    /// Every known field.
    #[must_use]
    pub fn rich() -> Self {
        Self {
            fields: PlaceField::ALL.to_vec(),
        }
    }

    #[must_use]
    pub fn for_tier(tier: DataTier) -> Self {
        match tier {
            DataTier::Lean => Self::lean(),
            DataTier::Rich => Self::rich(),
        }
    }

    /// Returns the mask with `field` added (no-op when already present).
    #[must_use]
    pub fn with(mut self, field: PlaceField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    #[must_use]
    pub fn contains(&self, field: PlaceField) -> bool {
        self.fields.contains(&field)
    }

    #[must_use]
    pub fn fields(&self) -> &[PlaceField] {
        &self.fields
    }

    /// Comma-joined value for the legacy `fields=` query parameter.
    #[must_use]
    pub fn legacy_param(&self) -> String {
        self.fields
            .iter()
            .flat_map(|f| f.legacy_tokens().iter().copied())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `X-Goog-FieldMask` value for a list endpoint (`places.` prefixed).
    #[must_use]
    pub fn search_header(&self) -> String {
        self.fields
            .iter()
            .flat_map(|f| f.modern_paths().iter().map(|p| format!("places.{p}")))
            .collect::<Vec<_>>()
            .join(",")
    }
}
