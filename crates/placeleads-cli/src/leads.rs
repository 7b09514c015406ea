//! Working-set command handlers: list, CRM edits and export.

use std::path::Path;

use placeleads_core::{BusinessLead, LeadStatus, WorkingSet};

use crate::store::LeadStore;

/// Print the working set as a table, one numbered row per lead.
pub(crate) fn run_list(working_set: &WorkingSet) {
    if working_set.is_empty() {
        println!("no leads yet; run `search` first");
        return;
    }
    if let Some(terms) = working_set.last_search() {
        println!("{} in {}", terms.category, terms.location);
    }
    print_leads(working_set.leads());
}

/// Set the CRM status of lead `row` and save.
///
/// # Errors
///
/// Returns an error if `row` is out of range or the store cannot be written.
pub(crate) fn run_set_status(
    store: &LeadStore,
    working_set: &mut WorkingSet,
    row: usize,
    status: LeadStatus,
) -> anyhow::Result<()> {
    let lead = working_set.set_status(row, status)?;
    println!("{row}. {} -> {status}", lead.name);
    store.save(working_set)
}

/// Replace the notes of lead `row` and save.
///
/// # Errors
///
/// Returns an error if `row` is out of range or the store cannot be written.
pub(crate) fn run_set_note(
    store: &LeadStore,
    working_set: &mut WorkingSet,
    row: usize,
    text: &str,
) -> anyhow::Result<()> {
    let lead = working_set.set_notes(row, text)?;
    println!("{row}. {} notes updated", lead.name);
    store.save(working_set)
}

/// Write the working set to a CSV file at `output`.
///
/// # Errors
///
/// Returns an error if the working set is empty or the file cannot be
/// written.
pub(crate) fn run_export(working_set: &WorkingSet, output: &Path) -> anyhow::Result<()> {
    if working_set.is_empty() {
        anyhow::bail!("nothing to export; run `search` first");
    }
    let rows = crate::export::export_csv(working_set.leads(), output)?;
    println!("exported {rows} leads to {}", output.display());
    Ok(())
}

pub(crate) fn print_leads(leads: &[BusinessLead]) {
    println!(
        "{:<5}{:<34}{:<9}{:<8}{:<11}ADDRESS",
        "ROW", "NAME", "REVIEWS", "RATING", "STATUS"
    );
    for (idx, lead) in leads.iter().enumerate() {
        let reviews = lead
            .review_count
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let rating = lead
            .rating
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        println!(
            "{:<5}{:<34}{:<9}{:<8}{:<11}{}",
            idx + 1,
            truncate(&lead.name, 32),
            reviews,
            rating,
            lead.status.label(),
            lead.address
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
