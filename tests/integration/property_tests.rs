//! Property-based tests for ranking invariants
//!
//! Generates arbitrary JSON payloads, biased toward keys the classifiers
//! react to, and checks that inference is total and its output is ranked.

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use view_inference::{ViewInferrer, ViewType, infer_view, infer_views};

/// Keys that trigger signature or structural probes, mixed with noise.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "type", "chartType", "layers", "center", "bounds", "columns", "rows", "schema",
            "submitTool", "events", "date", "value", "thresholds", "tracks", "bars", "entries",
            "level", "nodes", "children", "options", "votes", "title", "fields", "sections",
            "lat", "lon", "lng", "label",
        ])
        .prop_map(str::to_string),
        "[a-z]{1,8}",
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        prop::sample::select(ViewType::ALL.to_vec()).prop_map(|v| json!(v.as_str())),
        "(# |def |- |\\*\\*)?[a-z \\n]{0,20}".prop_map(|s| json!(s)),
    ]
}

fn json_value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((key_strategy(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #[test]
    fn test_inference_is_total(payload in json_value_strategy()) {
        let best = infer_view(&payload);
        prop_assert!((0.0..=1.0).contains(&best.confidence()));
        prop_assert!(!best.reason().is_empty());
    }

    #[test]
    fn test_suggestions_are_ranked(payload in json_value_strategy(), limit in 0usize..6) {
        let suggestions = infer_views(&payload, limit);
        assert_ranked!(suggestions, limit);
        if limit > 0 {
            prop_assert!(!suggestions.is_empty());
        } else {
            prop_assert!(suggestions.is_empty());
        }
    }

    #[test]
    fn test_best_view_heads_the_list(payload in json_value_strategy()) {
        let best = infer_view(&payload);
        let suggestions = infer_views(&payload, 3);
        prop_assert_eq!(best.view(), suggestions[0].view());
        prop_assert_eq!(best.confidence(), suggestions[0].confidence());
    }

    #[test]
    fn test_declared_type_always_wins(
        view in prop::sample::select(ViewType::ALL.to_vec()),
        extra in prop::collection::vec((key_strategy(), leaf_strategy()), 0..6)
    ) {
        let mut obj: Map<String, Value> = extra.into_iter().collect();
        obj.insert("type".to_string(), json!(view.as_str()));

        let suggestions = infer_views(&Value::Object(obj), 5);
        prop_assert_eq!(suggestions.len(), 1);
        prop_assert_eq!(suggestions[0].view(), view);
        prop_assert_eq!(suggestions[0].confidence(), 1.0);
    }

    #[test]
    fn test_limit_is_a_prefix(payload in json_value_strategy(), limit in 1usize..5) {
        let shorter = infer_views(&payload, limit);
        let longer = infer_views(&payload, limit + 1);
        prop_assert!(longer.starts_with(&shorter));
    }

    #[test]
    fn test_only_sampled_elements_matter(
        head in prop::collection::vec(json_value_strategy(), 1..5),
        tail in prop::collection::vec(json_value_strategy(), 0..10)
    ) {
        let inferrer = ViewInferrer::builder()
            .with_sample_size(head.len())
            .build()
            .unwrap();
        let mut full = head.clone();
        full.extend(tail);

        prop_assert_eq!(
            inferrer.infer_views(&Value::Array(head), 5),
            inferrer.infer_views(&Value::Array(full), 5)
        );
    }
}
