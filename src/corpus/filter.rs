//! Filter engine: compound predicates over the record list.

use super::Record;

/// The current combination of search query, category selection, and
/// annotation-presence toggle.
///
/// Owned by the view controller and rebuilt from live widget values on every
/// filter pass; never persisted. The default value is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query; trimmed before matching, case-insensitive.
    pub query: String,
    /// Exact match against a record's trimmed category; `""` means no filter.
    pub category: String,
    /// When set, records with an empty annotation are excluded.
    pub only_annotated: bool,
}

/// The ordered subset of `records` matching every active predicate.
///
/// Relative order among matches is strictly the original record order; there
/// is no ranking and no limit. A pure function of its inputs.
pub fn filter<'a>(records: &'a [Record], state: &FilterState) -> Vec<&'a Record> {
    let needle = state.query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| !state.only_annotated || !r.annotation.is_empty())
        .filter(|r| needle.is_empty() || matches_query(r, &needle))
        .filter(|r| state.category.is_empty() || r.category.trim() == state.category)
        .collect()
}

/// Case-insensitive substring match against any of the four text fields.
/// `needle` must already be trimmed and lowercased.
fn matches_query(record: &Record, needle: &str) -> bool {
    record.topic.to_lowercase().contains(needle)
        || record.text.to_lowercase().contains(needle)
        || record.annotation.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
}
