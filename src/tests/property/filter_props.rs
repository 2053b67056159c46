//! Property-based tests for the filter engine.
//!
//! Invariants:
//! - the default state is the identity filter
//! - output is always an order-preserving subsequence of the input
//! - filtering is a pure function (same inputs, same output)
//! - every output record satisfies every active predicate

use proptest::prelude::*;
use serde_json::json;

use crate::corpus::filter::{filter, FilterState};
use crate::corpus::Record;

/// Text fields mixing ASCII, whitespace padding, and Devanagari.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z ]{0,12}",
        " ?[a-c]{1,4} ?",
        Just("प्रत्यक्ष".to_string()),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (0u64..1000, arb_text(), arb_text(), arb_text(), arb_text()).prop_map(
        |(id, category, topic, text, annotation)| Record {
            id: json!(id),
            category,
            topic,
            text,
            annotation,
        },
    )
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..24)
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (arb_text(), arb_text(), any::<bool>()).prop_map(|(query, category, only_annotated)| {
        FilterState {
            query,
            category,
            only_annotated,
        }
    })
}

/// Assert `out` is a subsequence of `records`, by identity.
fn assert_subsequence(records: &[Record], out: &[&Record]) {
    let mut cursor = 0usize;
    for matched in out {
        let pos = records[cursor..]
            .iter()
            .position(|r| std::ptr::eq(r, *matched))
            .expect("output record must appear after the previous match");
        cursor += pos + 1;
    }
}

proptest! {
    #[test]
    fn default_state_is_identity(records in arb_records()) {
        let out = filter(&records, &FilterState::default());
        prop_assert_eq!(out.len(), records.len());
        for (got, want) in out.iter().zip(records.iter()) {
            prop_assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn output_is_ordered_subsequence(records in arb_records(), state in arb_state()) {
        let out = filter(&records, &state);
        assert_subsequence(&records, &out);
    }

    #[test]
    fn filtering_is_pure(records in arb_records(), state in arb_state()) {
        let first = filter(&records, &state);
        let second = filter(&records, &state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_match_satisfies_active_predicates(
        records in arb_records(),
        state in arb_state(),
    ) {
        let needle = state.query.trim().to_lowercase();
        for r in filter(&records, &state) {
            if state.only_annotated {
                prop_assert!(!r.annotation.is_empty());
            }
            if !state.category.is_empty() {
                prop_assert_eq!(r.category.trim(), state.category.as_str());
            }
            if !needle.is_empty() {
                let hit = r.topic.to_lowercase().contains(&needle)
                    || r.text.to_lowercase().contains(&needle)
                    || r.annotation.to_lowercase().contains(&needle)
                    || r.category.to_lowercase().contains(&needle);
                prop_assert!(hit);
            }
        }
    }

    #[test]
    fn rejected_records_fail_some_predicate(
        records in arb_records(),
        state in arb_state(),
    ) {
        let out = filter(&records, &state);
        let needle = state.query.trim().to_lowercase();
        for r in &records {
            if out.iter().any(|m| std::ptr::eq(*m, r)) {
                continue;
            }
            let annotated_ok = !state.only_annotated || !r.annotation.is_empty();
            let category_ok =
                state.category.is_empty() || r.category.trim() == state.category;
            let query_ok = needle.is_empty()
                || r.topic.to_lowercase().contains(&needle)
                || r.text.to_lowercase().contains(&needle)
                || r.annotation.to_lowercase().contains(&needle)
                || r.category.to_lowercase().contains(&needle);
            prop_assert!(!(annotated_ok && category_ok && query_ok));
        }
    }
}
