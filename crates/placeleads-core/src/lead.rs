use serde::{Deserialize, Serialize};

use crate::CoreError;

/// CRM state a user assigns to a lead in the working set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    Pending,
    Contacted,
    FollowUp,
    Scheduled,
    Dead,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::Pending,
        LeadStatus::Contacted,
        LeadStatus::FollowUp,
        LeadStatus::Scheduled,
        LeadStatus::Dead,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::FollowUp => "Follow Up",
            LeadStatus::Scheduled => "Scheduled",
            LeadStatus::Dead => "Dead",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = CoreError;

    /// Accepts the display label or a compact form, ignoring case and
    /// separators: `"Follow Up"`, `"follow-up"` and `"followup"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "pending" => Ok(LeadStatus::Pending),
            "contacted" => Ok(LeadStatus::Contacted),
            "followup" => Ok(LeadStatus::FollowUp),
            "scheduled" => Ok(LeadStatus::Scheduled),
            "dead" => Ok(LeadStatus::Dead),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

/// Canonical business-lead record.
///
/// `website`, `phone`, `rating` and `review_count` stay `None` for leads
/// fetched at the lean tier, so "not fetched" is distinguishable from a
/// zero or empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLead {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    /// Provider place identifier; the identity and deduplication key.
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub maps_link: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub notes: String,
}

impl BusinessLead {
    /// A lead with only the required fields set and default CRM state.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            website: None,
            phone: None,
            rating: None,
            review_count: None,
            external_id: None,
            maps_link: None,
            status: LeadStatus::Pending,
            notes: String::new(),
        }
    }

    /// Review count used for ranking; missing counts rank as zero.
    #[must_use]
    pub fn ranking_reviews(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }

    /// Number of rich-tier fields that carry a value.
    #[must_use]
    pub fn rich_field_count(&self) -> usize {
        [
            self.website.is_some(),
            self.phone.is_some(),
            self.rating.is_some(),
            self.review_count.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// `true` when the lead has a non-blank website.
    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(LeadStatus::default(), LeadStatus::Pending);
    }

    #[test]
    fn status_parses_label_and_compact_forms() {
        assert_eq!("Follow Up".parse::<LeadStatus>().unwrap(), LeadStatus::FollowUp);
        assert_eq!("follow-up".parse::<LeadStatus>().unwrap(), LeadStatus::FollowUp);
        assert_eq!("FOLLOWUP".parse::<LeadStatus>().unwrap(), LeadStatus::FollowUp);
        assert_eq!("dead".parse::<LeadStatus>().unwrap(), LeadStatus::Dead);
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "archived".parse::<LeadStatus>().unwrap_err();
        assert_eq!(err, CoreError::InvalidStatus("archived".to_string()));
    }

    #[test]
    fn status_display_round_trips_through_parse() {
        for status in LeadStatus::ALL {
            assert_eq!(status.to_string().parse::<LeadStatus>().unwrap(), status);
        }
    }

    #[test]
    fn new_lead_has_default_crm_fields() {
        let lead = BusinessLead::new("Crumb Bakery", "1 Main St");
        assert_eq!(lead.status, LeadStatus::Pending);
        assert!(lead.notes.is_empty());
        assert!(lead.website.is_none());
    }

    #[test]
    fn ranking_reviews_treats_missing_as_zero() {
        let mut lead = BusinessLead::new("A", "B");
        assert_eq!(lead.ranking_reviews(), 0);
        lead.review_count = Some(12);
        assert_eq!(lead.ranking_reviews(), 12);
    }

    #[test]
    fn has_website_ignores_blank_values() {
        let mut lead = BusinessLead::new("A", "B");
        lead.website = Some("   ".to_string());
        assert!(!lead.has_website());
        lead.website = Some("https://crumb.example".to_string());
        assert!(lead.has_website());
    }

    #[test]
    fn deserializes_record_without_crm_fields() {
        let lead: BusinessLead = serde_json::from_value(serde_json::json!({
            "name": "Crumb Bakery",
            "address": "1 Main St",
            "external_id": "abc"
        }))
        .unwrap();
        assert_eq!(lead.status, LeadStatus::Pending);
        assert_eq!(lead.external_id.as_deref(), Some("abc"));
        assert!(lead.review_count.is_none());
    }
}
