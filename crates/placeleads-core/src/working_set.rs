//! The annotated collection of leads a user works through.
//!
//! The acquisition pipeline knows nothing about CRM state; every search
//! yields leads with default status and notes. The working set is where
//! status and notes live, and it carries them across re-searches for any
//! lead whose identifier was already present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lead::{BusinessLead, LeadStatus};
use crate::search::SearchTerms;
use crate::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkingSet {
    #[serde(default)]
    leads: Vec<BusinessLead>,
    #[serde(default)]
    last_search: Option<SearchTerms>,
}

impl WorkingSet {
    #[must_use]
    pub fn new(leads: Vec<BusinessLead>, last_search: Option<SearchTerms>) -> Self {
        Self { leads, last_search }
    }

    #[must_use]
    pub fn leads(&self) -> &[BusinessLead] {
        &self.leads
    }

    #[must_use]
    pub fn last_search(&self) -> Option<&SearchTerms> {
        self.last_search.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Replaces the leads with a fresh search result, keeping the ranked
    /// order of `leads`. Status and notes of previously held leads with the
    /// same `external_id` are carried onto the new records.
    ///
    /// Returns how many leads kept earlier annotations.
    pub fn replace_with_search(&mut self, terms: SearchTerms, mut leads: Vec<BusinessLead>) -> usize {
        let previous: HashMap<&str, (LeadStatus, &str)> = self
            .leads
            .iter()
            .filter_map(|lead| {
                lead.external_id
                    .as_deref()
                    .map(|id| (id, (lead.status, lead.notes.as_str())))
            })
            .collect();

        let mut carried = 0;
        for lead in &mut leads {
            let Some(id) = lead.external_id.as_deref() else {
                continue;
            };
            if let Some((status, notes)) = previous.get(id) {
                lead.status = *status;
                lead.notes = (*notes).to_string();
                carried += 1;
            }
        }

        self.leads = leads;
        self.last_search = Some(terms);
        carried
    }

    /// Sets the status of the lead at 1-based `row`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RowOutOfRange`] if `row` does not address a lead.
    pub fn set_status(&mut self, row: usize, status: LeadStatus) -> Result<&BusinessLead, CoreError> {
        let lead = self.lead_mut(row)?;
        lead.status = status;
        Ok(lead)
    }

    /// Replaces the notes of the lead at 1-based `row`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RowOutOfRange`] if `row` does not address a lead.
    pub fn set_notes(&mut self, row: usize, notes: impl Into<String>) -> Result<&BusinessLead, CoreError> {
        let lead = self.lead_mut(row)?;
        lead.notes = notes.into();
        Ok(lead)
    }

    fn lead_mut(&mut self, row: usize) -> Result<&mut BusinessLead, CoreError> {
        let len = self.leads.len();
        row.checked_sub(1)
            .and_then(|idx| self.leads.get_mut(idx))
            .ok_or(CoreError::RowOutOfRange { row, len })
    }
}
