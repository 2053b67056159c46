//! Test fixtures shared across unit and property suites.

use serde_json::json;

use crate::corpus::Record;

/// Build a record with a numeric id and the given text fields.
pub fn record(id: u64, category: &str, topic: &str, text: &str, annotation: &str) -> Record {
    Record {
        id: json!(id),
        category: category.to_string(),
        topic: topic.to_string(),
        text: text.to_string(),
        annotation: annotation.to_string(),
    }
}

/// The canonical two-record corpus used throughout the filter tests.
pub fn sample_records() -> Vec<Record> {
    vec![
        record(1, "A", "T1", "foo bar", ""),
        record(2, "B", "T2", "baz", "note"),
    ]
}
