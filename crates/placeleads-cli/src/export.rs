//! Spreadsheet export of the working set.
//!
//! Rows are built as typed cells first; link cells carry a display string
//! and a target URL. The CSV writer renders those as `HYPERLINK` formulas so
//! they open as clickable links in a spreadsheet.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use placeleads_core::BusinessLead;

pub(crate) const COLUMNS: [&str; 9] = [
    "Business Name",
    "Address",
    "Phone",
    "Website",
    "Google Maps Link",
    "Rating",
    "Review Count",
    "Status",
    "Notes",
];

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExportCell {
    Text(String),
    Link { display: String, target: String },
}

impl ExportCell {
    fn text(value: impl Into<String>) -> Self {
        ExportCell::Text(value.into())
    }

    fn link(display: impl Into<String>, target: impl Into<String>) -> Self {
        ExportCell::Link {
            display: display.into(),
            target: target.into(),
        }
    }

    /// Cell content as written to CSV.
    fn render(&self) -> String {
        match self {
            ExportCell::Text(text) => neutralize_formula(text),
            ExportCell::Link { display, target } => format!(
                "=HYPERLINK(\"{}\",\"{}\")",
                escape_formula(target),
                escape_formula(display)
            ),
        }
    }
}

/// One lead's cells, in [`COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportRow {
    pub cells: [ExportCell; 9],
}

/// Builds one row per lead in working-set order.
pub(crate) fn export_rows(leads: &[BusinessLead]) -> Vec<ExportRow> {
    leads.iter().map(export_row).collect()
}

fn export_row(lead: &BusinessLead) -> ExportRow {
    let phone = match lead.phone.as_deref().and_then(|p| messaging_link(p).map(|l| (p, l))) {
        Some((display, target)) => ExportCell::link(display, target),
        None => ExportCell::text(NOT_AVAILABLE),
    };

    let website = match lead.website.as_deref() {
        Some(site) if lead.has_website() => ExportCell::link(site, site),
        _ => ExportCell::link("Search", web_search_link(lead)),
    };

    let maps = match lead.maps_link.as_deref() {
        Some(link) => ExportCell::link("View on Maps", link),
        None => ExportCell::text(NOT_AVAILABLE),
    };

    ExportRow {
        cells: [
            ExportCell::text(lead.name.as_str()),
            ExportCell::text(lead.address.as_str()),
            phone,
            website,
            maps,
            ExportCell::text(
                lead.rating
                    .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string()),
            ),
            ExportCell::text(
                lead.review_count
                    .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
            ),
            ExportCell::text(lead.status.label()),
            ExportCell::text(lead.notes.as_str()),
        ],
    }
}

/// `https://wa.me/<digits>` for a phone number, or `None` when it has no
/// digits.
pub(crate) fn messaging_link(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("https://wa.me/{digits}"))
    }
}

fn web_search_link(lead: &BusinessLead) -> String {
    let query = format!("{} {}", lead.name, lead.address);
    format!(
        "https://www.google.com/search?q={}",
        utf8_percent_encode(&query, NON_ALPHANUMERIC)
    )
}

/// Text starting with a formula trigger is prefixed with `'` so a
/// spreadsheet shows it literally.
fn neutralize_formula(text: &str) -> String {
    if text.starts_with(['=', '+', '-', '@']) {
        format!("'{text}")
    } else {
        text.to_owned()
    }
}

fn escape_formula(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Writes a header row and `rows` as CSV.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub(crate) fn write_csv<W: Write>(writer: W, rows: &[ExportRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.write_record(row.cells.iter().map(ExportCell::render))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports `leads` to a CSV file at `path` and returns the row count.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn export_csv(leads: &[BusinessLead], path: &Path) -> anyhow::Result<usize> {
    let rows = export_rows(leads);
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(file, &rows)?;
    tracing::info!(rows = rows.len(), path = %path.display(), "exported leads");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use placeleads_core::LeadStatus;

    use super::*;

    fn rich_lead() -> BusinessLead {
        let mut lead = BusinessLead::new("Crumb \"Best\" Bakery", "1 Main St, Austin");
        lead.website = Some("https://crumb.example".to_owned());
        lead.phone = Some("+1 512-555-0100".to_owned());
        lead.rating = Some(4.5);
        lead.review_count = Some(210);
        lead.maps_link = Some("https://maps.google.com/?cid=42".to_owned());
        lead.status = LeadStatus::FollowUp;
        lead.notes = "ask for owner".to_owned();
        lead
    }

    #[test]
    fn rich_lead_row_has_links_and_values() {
        let row = export_row(&rich_lead());
        assert_eq!(
            row.cells[2],
            ExportCell::link("+1 512-555-0100", "https://wa.me/15125550100")
        );
        assert_eq!(
            row.cells[3],
            ExportCell::link("https://crumb.example", "https://crumb.example")
        );
        assert_eq!(
            row.cells[4],
            ExportCell::link("View on Maps", "https://maps.google.com/?cid=42")
        );
        assert_eq!(row.cells[5], ExportCell::text("4.5"));
        assert_eq!(row.cells[6], ExportCell::text("210"));
        assert_eq!(row.cells[7], ExportCell::text("Follow Up"));
        assert_eq!(row.cells[8], ExportCell::text("ask for owner"));
    }

    #[test]
    fn lean_lead_row_uses_placeholders() {
        let lead = BusinessLead::new("Loaf", "9 Oak Ave");
        let row = export_row(&lead);
        assert_eq!(row.cells[2], ExportCell::text("N/A"));
        assert_eq!(row.cells[4], ExportCell::text("N/A"));
        assert_eq!(row.cells[5], ExportCell::text("N/A"));
        assert_eq!(row.cells[6], ExportCell::text("N/A"));
        assert_eq!(row.cells[7], ExportCell::text("Pending"));
    }

    #[test]
    fn missing_website_links_to_a_web_search() {
        let row = export_row(&BusinessLead::new("Loaf & Co", "9 Oak Ave"));
        let ExportCell::Link { display, target } = &row.cells[3] else {
            panic!("expected link cell, got {:?}", row.cells[3]);
        };
        assert_eq!(display, "Search");
        assert_eq!(
            target,
            "https://www.google.com/search?q=Loaf%20%26%20Co%209%20Oak%20Ave"
        );
    }

    #[test]
    fn blank_website_links_to_a_web_search() {
        let mut lead = BusinessLead::new("Loaf", "9 Oak Ave");
        lead.website = Some("  ".to_owned());
        let row = export_row(&lead);
        assert!(matches!(
            &row.cells[3],
            ExportCell::Link { display, .. } if display == "Search"
        ));
    }

    #[test]
    fn text_cells_starting_with_formula_triggers_are_quoted() {
        for raw in ["=HYPERLINK(\"x\")", "+1 call", "-cancel", "@owner"] {
            assert_eq!(ExportCell::text(raw).render(), format!("'{raw}"));
        }
        assert_eq!(ExportCell::text("Crumb Bakery").render(), "Crumb Bakery");
        assert_eq!(ExportCell::text("4.5").render(), "4.5");
    }

    #[test]
    fn formula_like_note_is_written_as_text() {
        let mut lead = BusinessLead::new("=SUM(A1:A9)", "1 Main St");
        lead.notes = "@manager follow up".to_owned();
        let mut out = Vec::new();
        write_csv(&mut out, &export_rows(&[lead])).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();

        assert!(row.starts_with("'=SUM(A1:A9),"), "got: {row}");
        assert!(row.ends_with("'@manager follow up"), "got: {row}");
    }

    #[test]
    fn phone_without_digits_is_not_a_link() {
        assert_eq!(messaging_link("ext. only"), None);
        assert_eq!(
            messaging_link("(512) 555-0100").as_deref(),
            Some("https://wa.me/5125550100")
        );
    }

    #[test]
    fn csv_has_header_and_hyperlink_formulas() {
        let mut out = Vec::new();
        write_csv(&mut out, &export_rows(&[rich_lead()])).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("Business Name,Address,Phone,Website,Google Maps Link,Rating,Review Count,Status,Notes")
        );
        let row = lines.next().unwrap();
        assert!(row.contains(r#""=HYPERLINK(""https://wa.me/15125550100"",""+1 512-555-0100"")""#));
        assert!(row.contains(r#""Crumb ""Best"" Bakery""#));
    }

    #[test]
    fn formula_quotes_are_doubled() {
        let cell = ExportCell::link("Say \"hi\"", "https://x.example");
        assert_eq!(
            cell.render(),
            r#"=HYPERLINK("https://x.example","Say ""hi""")"#
        );
    }

    #[test]
    fn export_preserves_lead_order() {
        let rows = export_rows(&[
            BusinessLead::new("first", "a"),
            BusinessLead::new("second", "b"),
        ]);
        assert_eq!(rows[0].cells[0], ExportCell::text("first"));
        assert_eq!(rows[1].cells[0], ExportCell::text("second"));
    }

    #[test]
    fn export_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");
        let count = export_csv(&[rich_lead(), BusinessLead::new("b", "c")], &path).unwrap();
        assert_eq!(count, 2);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
