//! Array payloads: sampling, geo detection and fallbacks.

use crate::common::fixtures;
use serde_json::{Value, json};
use view_inference::{ViewType, infer_view, infer_views};

#[test]
fn test_coordinates_suggest_map() {
    assert_best_view!(
        &json!([{"lat": 51.5, "lon": -0.1, "name": "London"}]),
        ViewType::Map,
        0.70
    );

    let suggestions = infer_views(&fixtures::city_rows(), 3);
    let views: Vec<ViewType> = suggestions.iter().map(|s| s.view()).collect();
    assert_eq!(views, vec![ViewType::Map, ViewType::DataTable]);
}

#[test]
fn test_label_value_pairs_suggest_chart() {
    assert_best_view!(
        &json!([{"label": "Jan", "value": 100}, {"label": "Feb", "value": 200}]),
        ViewType::Chart,
        0.60
    );
}

#[test]
fn test_plain_records_suggest_datatable() {
    let best = infer_view(&fixtures::people_rows());
    assert_eq!(best.view(), ViewType::DataTable);

    let best = infer_view(&json!([{"id": 1}, {"id": 2}]));
    assert_eq!(best.view(), ViewType::DataTable);
    assert!(best.confidence() >= 0.40);
}

#[test]
fn test_limit_cuts_lower_ranked_views() {
    let payload = json!([{"lat": 51, "lon": 0, "label": "X", "value": 1}]);
    let suggestions = infer_views(&payload, 2);
    let views: Vec<ViewType> = suggestions.iter().map(|s| s.view()).collect();

    assert_eq!(views, vec![ViewType::Map, ViewType::Chart]);
}

#[test]
fn test_numbers_suggest_chart() {
    let best = infer_view(&json!([3, 1, 4, 1, 5, 9, 2, 6]));

    assert_eq!(best.view(), ViewType::Chart);
    assert_eq!(best.confidence(), 0.60);
}

#[test]
fn test_empty_and_mixed_arrays() {
    let best = infer_view(&json!([]));
    assert_eq!(best.view(), ViewType::Json);
    assert_eq!(best.confidence(), 0.50);

    let best = infer_view(&json!(["a", 1, null]));
    assert_eq!(best.view(), ViewType::Json);
}

#[test]
fn test_large_arrays_are_sampled() {
    let mut rows: Vec<Value> = (0..5).map(|i| json!({"id": i})).collect();
    rows.extend((0..10_000).map(|i| json!({"lat": i, "lon": i})));

    let suggestions = infer_views(&Value::Array(rows), 3);
    let views: Vec<ViewType> = suggestions.iter().map(|s| s.view()).collect();
    assert_eq!(views, vec![ViewType::DataTable]);
}
