//! Property-based tests for the category index.
//!
//! Invariants:
//! - no duplicates (by trimmed value), sorted ascending
//! - per-category counts partition the corpus: they sum to `records.len()`

use proptest::prelude::*;
use serde_json::json;

use crate::corpus::categories::{categories, count_in_category};
use crate::corpus::Record;

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        " ?[a-d]{1,3} ?",
        Just("न्याय".to_string()),
    ]
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        arb_category().prop_map(|category| Record {
            id: json!(0),
            category,
            topic: String::new(),
            text: String::new(),
            annotation: String::new(),
        }),
        0..32,
    )
}

proptest! {
    #[test]
    fn no_duplicates_and_sorted(records in arb_records()) {
        let cats = categories(&records);
        for pair in cats.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn values_are_trimmed(records in arb_records()) {
        for c in categories(&records) {
            prop_assert_eq!(c.trim(), c.as_str());
        }
    }

    #[test]
    fn counts_partition_the_corpus(records in arb_records()) {
        let total: usize = categories(&records)
            .iter()
            .map(|c| count_in_category(&records, c))
            .sum();
        prop_assert_eq!(total, records.len());
    }

    #[test]
    fn every_record_is_indexed(records in arb_records()) {
        let cats = categories(&records);
        for r in &records {
            prop_assert!(cats.iter().any(|c| c == r.category.trim()));
        }
    }
}
