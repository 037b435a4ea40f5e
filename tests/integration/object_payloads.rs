//! Object payloads: discriminator, signature and structural tiers.

use crate::common::fixtures;
use serde_json::json;
use view_inference::{ViewType, infer_view, infer_views};

#[test]
fn test_declared_type_is_authoritative() {
    let payload = fixtures::declared_chart();
    let suggestions = infer_views(&payload, 5);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].view(), ViewType::Chart);
    assert_eq!(suggestions[0].confidence(), 1.0);
}

#[test]
fn test_declared_type_overrides_conflicting_signatures() {
    let payload = json!({"type": "gis-legend", "columns": [], "rows": [], "layers": [], "center": {}});
    let best = infer_view(&payload);

    assert_eq!(best.view(), ViewType::GisLegend);
    assert_eq!(best.confidence(), 1.0);
}

#[test]
fn test_unrecognized_type_is_ignored() {
    // GeoJSON's own "type" values are not view names
    let payload = json!({"type": "FeatureCollection", "features": []});
    let best = infer_view(&payload);

    assert_eq!(best.view(), ViewType::Json);
    assert_eq!(best.confidence(), 0.50);
}

#[test]
fn test_signature_fixtures() {
    for (expected, payload) in fixtures::signature_payloads() {
        assert_best_view!(&payload, expected, 0.80);
        assert_ranked!(infer_views(&payload, 3), 3);
    }
}

#[test]
fn test_contrived_payload_returns_every_signature() {
    let payload = json!({
        "layers": [{"features": []}],
        "center": {"lat": 0, "lon": 0},
        "columns": ["a"],
        "rows": [[1]],
        "children": []
    });
    let suggestions = infer_views(&payload, 5);
    let views: Vec<ViewType> = suggestions.iter().map(|s| s.view()).collect();

    assert_eq!(views, vec![ViewType::Map, ViewType::DataTable, ViewType::Tree]);
    assert_ranked!(suggestions, 5);
}

#[test]
fn test_detail_structure() {
    let payload = json!({"title": "Site Report", "fields": [{"label": "Name", "value": "..."}]});
    assert_best_view!(&payload, ViewType::Detail, 0.60);

    let suggestions = infer_views(&payload, 3);
    assert_eq!(suggestions.last().unwrap().view(), ViewType::Json);
}

#[test]
fn test_numeric_value_counter() {
    let best = infer_view(&json!({"value": 42}));

    assert_eq!(best.view(), ViewType::Counter);
    assert!(best.confidence() >= 0.60);
    assert!(best.confidence() < 0.85);
}

#[test]
fn test_detail_and_counter_rank_together() {
    let payload = json!({"title": "Uptime", "sections": [], "value": 99.9});
    let views: Vec<ViewType> = infer_views(&payload, 3).iter().map(|s| s.view()).collect();

    assert_eq!(views, vec![ViewType::Detail, ViewType::Counter, ViewType::Json]);
}

#[test]
fn test_nested_object_falls_back_to_json() {
    let best = infer_view(&json!({"deeply": {"nested": {"data": 1}}}));

    assert_eq!(best.view(), ViewType::Json);
    assert!(best.confidence() >= 0.40);
}
