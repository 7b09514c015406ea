//! Final deduplication and ranking of a result set.

use std::collections::HashMap;

use placeleads_core::BusinessLead;

/// Deduplicates by `external_id`, then sorts by review count descending
/// (missing counts as zero). The sort is stable, so ties keep discovery
/// order.
///
/// A duplicate keeps the position of its first occurrence; its content is
/// replaced only when a later occurrence has strictly more rich fields
/// populated. Leads without an `external_id` are never merged.
#[must_use]
pub fn finalize(leads: Vec<BusinessLead>) -> Vec<BusinessLead> {
    let mut unique: Vec<BusinessLead> = Vec::with_capacity(leads.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for lead in leads {
        let Some(id) = lead.external_id.clone() else {
            unique.push(lead);
            continue;
        };
        match positions.get(&id) {
            Some(&index) => {
                if lead.rich_field_count() > unique[index].rich_field_count() {
                    unique[index] = lead;
                }
            }
            None => {
                positions.insert(id, unique.len());
                unique.push(lead);
            }
        }
    }

    unique.sort_by_key(|lead| std::cmp::Reverse(lead.ranking_reviews()));
    unique
}
