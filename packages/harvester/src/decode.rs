//! XML record decoding.
//!
//! Turns one page of raw Adlib XML into an ordered sequence of
//! [`ProductionRecord`] entities. Field extraction is driven by a
//! declarative path table so each mapping can be tested on its own.

use roxmltree::{Document, Node};

use crate::error::{HarvestError, Result};
use crate::normalize::{canonicalize_date, classify_subjects, clean_producers};
use crate::types::ProductionRecord;
use crate::xml::{collect_by_path, find_by_path, get_tag_name, get_text};

/// Extraction rule for one scalar field: a record-relative element path,
/// with an optional fallback to an attribute on the `<record>` element
/// itself. Missing fields default to the empty string.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath {
    pub name: &'static str,
    pub path: &'static str,
    pub record_attr: Option<&'static str>,
}

pub const RECORD_ID: FieldPath = FieldPath {
    name: "record_id",
    path: "priref",
    record_attr: Some("priref"),
};

pub const TITLE: FieldPath = FieldPath {
    name: "title",
    path: "Title/title",
    record_attr: None,
};

pub const DISCIPLINE: FieldPath = FieldPath {
    name: "discipline",
    path: "discipline",
    record_attr: None,
};

pub const START_DATE: FieldPath = FieldPath {
    name: "start_date",
    path: "Dating/dating.date.start",
    record_attr: None,
};

pub const VENUE: FieldPath = FieldPath {
    name: "venue",
    path: "venue",
    record_attr: None,
};

pub const NOTES: FieldPath = FieldPath {
    name: "notes",
    path: "notes",
    record_attr: None,
};

/// All scalar extraction rules, for table-driven tests.
pub const SCALAR_FIELDS: &[FieldPath] =
    &[RECORD_ID, TITLE, DISCIPLINE, START_DATE, VENUE, NOTES];

/// Path to the multi-valued producer company names.
pub const PRODUCERS_PATH: &str = "producent/company";

/// Path to the multi-valued subject field feeding season/tag classification.
pub const SUBJECTS_PATH: &str = "Content_subject/content.subject";

/// Extract a scalar field from a record element, or the empty string.
#[must_use]
pub fn extract_or_default(record: Node<'_, '_>, field: &FieldPath) -> String {
    if let Some(node) = find_by_path(record, field.path) {
        let text = get_text(node);
        if !text.is_empty() {
            return text;
        }
    }
    field
        .record_attr
        .and_then(|attr| record.attribute(attr))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Decode one page of raw XML into production records, in document order.
///
/// A body that is not well-formed XML is a [`HarvestError::XmlParse`].
/// Decoding is otherwise total except for the start date: a record whose
/// date fails canonicalization aborts decoding of the remainder of the
/// page. Records decoded before the bad one are returned and the failure
/// is logged at WARN. Callers inferring end-of-results from a short page
/// will treat such a truncated page as final; this mirrors the behavior
/// of the system we import into and is kept for compatibility.
pub fn decode_page(xml: &str, denylist: &[String]) -> Result<Vec<ProductionRecord>> {
    let doc = Document::parse(xml)?;
    let mut records = Vec::new();

    for node in doc
        .descendants()
        .filter(|n| n.is_element() && get_tag_name(*n) == "record")
    {
        match decode_record(node, denylist) {
            Ok(record) => records.push(record),
            Err(HarvestError::DateParse(raw)) => {
                tracing::warn!(
                    record_id = %extract_or_default(node, &RECORD_ID),
                    raw_date = %raw,
                    decoded = records.len(),
                    "record has no parseable start date, dropping remainder of page"
                );
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}

/// Decode a single `<record>` element.
fn decode_record(node: Node<'_, '_>, denylist: &[String]) -> Result<ProductionRecord> {
    let start_date = canonicalize_date(&extract_or_default(node, &START_DATE))?;

    let producers = clean_producers(&collect_by_path(node, PRODUCERS_PATH), denylist);
    let (seasons, tags) = classify_subjects(&collect_by_path(node, SUBJECTS_PATH));

    Ok(ProductionRecord {
        record_id: extract_or_default(node, &RECORD_ID),
        title: extract_or_default(node, &TITLE),
        discipline: extract_or_default(node, &DISCIPLINE),
        start_date,
        producers,
        venue: extract_or_default(node, &VENUE),
        notes: extract_or_default(node, &NOTES),
        seasons,
        tags,
    })
}
