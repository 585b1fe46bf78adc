//! Core data types for the harvester.

use serde::{Deserialize, Serialize};

/// Separator used by [`ProductionRecord::joined_producers`].
pub const PRODUCER_JOIN_SEPARATOR: &str = " ? ";

/// One normalized theater production, decoded from a single upstream
/// `<record>` element.
///
/// Constructed once during decoding and immutable thereafter; persistence
/// and dedup-by-`record_id` are the import collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// Unique upstream identifier (priref). Upstream sometimes omits it;
    /// such records are admitted with an empty id.
    pub record_id: String,

    /// Production title, may be empty.
    pub title: String,

    /// Free-text discipline label (e.g., "toneel").
    pub discipline: String,

    /// ISO-8601 timestamp at midnight, derived from a strict `YYYY-MM-DD`
    /// upstream field. Records without a parseable start date are invalid.
    pub start_date: String,

    /// Normalized producer company names, in document order, with
    /// placeholder entries filtered out.
    pub producers: Vec<String>,

    /// Venue name, may be empty.
    pub venue: String,

    /// Free-text notes, defaults to empty.
    #[serde(default)]
    pub notes: String,

    /// Season labels (e.g., "2021-2022") split off from the upstream
    /// subject field.
    #[serde(default)]
    pub seasons: Vec<String>,

    /// Remaining subject values, verbatim. Disjoint from `seasons`.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductionRecord {
    /// Render producers as a single ` ? `-joined string.
    ///
    /// This is the alternative flat shape some consumers expect. It is
    /// lossy for producer names that themselves contain ` ? `; the list
    /// form in [`ProductionRecord::producers`] is authoritative.
    #[must_use]
    pub fn joined_producers(&self) -> String {
        self.producers.join(PRODUCER_JOIN_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ProductionRecord {
        ProductionRecord {
            record_id: "100712".to_string(),
            title: "De Meeuw".to_string(),
            discipline: "toneel".to_string(),
            start_date: "2021-09-18T00:00:00".to_string(),
            producers: vec![
                "Tweetakt".to_string(),
                "Productiehuis Theater Rotterdam".to_string(),
            ],
            venue: "Stadsschouwburg Utrecht".to_string(),
            notes: String::new(),
            seasons: vec!["2021-2022".to_string()],
            tags: vec!["Jeugdtheater".to_string()],
        }
    }

    #[test]
    fn test_joined_producers() {
        let record = sample_record();
        assert_eq!(
            record.joined_producers(),
            "Tweetakt ? Productiehuis Theater Rotterdam"
        );
    }

    #[test]
    fn test_joined_producers_empty() {
        let mut record = sample_record();
        record.producers.clear();
        assert_eq!(record.joined_producers(), "");
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ProductionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_json_field_names() {
        let record = sample_record();
        let value = serde_json::to_value(&record).unwrap();
        for field in [
            "record_id",
            "title",
            "discipline",
            "start_date",
            "producers",
            "venue",
            "notes",
            "seasons",
            "tags",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
