//! Category index: distinct trimmed labels with live counts.

use super::Record;

/// Distinct trimmed category values, lexicographically ascending.
///
/// Deduplication is by trimmed value; internal content (including case) is
/// preserved. The empty string is a valid category meaning "no category" and
/// sorts like any other string.
pub fn categories(records: &[Record]) -> Vec<String> {
    let mut cats: Vec<String> = records
        .iter()
        .map(|r| r.category.trim().to_string())
        .collect();
    cats.sort();
    cats.dedup();
    cats
}

/// How many records carry exactly this trimmed category value.
///
/// Annotates facet rows; the "All" facet shows `records.len()` instead.
pub fn count_in_category(records: &[Record], category: &str) -> usize {
    records
        .iter()
        .filter(|r| r.category.trim() == category)
        .count()
}
