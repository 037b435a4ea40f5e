//! Representative payloads for inference tests.

use serde_json::{Value, json};
use view_inference::ViewType;

/// Objects that each carry exactly one signature field combination.
pub fn signature_payloads() -> Vec<(ViewType, Value)> {
    vec![
        (
            ViewType::Chart,
            json!({"chartType": "bar", "data": [{"label": "Q1", "values": [{"label": "A", "value": 10}]}]}),
        ),
        (
            ViewType::Map,
            json!({"layers": [{"features": []}], "center": {"lat": 51, "lon": 0}}),
        ),
        (
            ViewType::DataTable,
            json!({"columns": [{"key": "name"}], "rows": [{"name": "Alice"}]}),
        ),
        (
            ViewType::Form,
            json!({"schema": {"properties": {"name": {"type": "string"}}}, "submitTool": "save"}),
        ),
        (
            ViewType::Timeline,
            json!({"events": [{"date": "2024-01-01", "title": "Start"}]}),
        ),
        (
            ViewType::Gauge,
            json!({"value": 75, "min": 0, "max": 100, "thresholds": [{"value": 50, "color": "yellow"}]}),
        ),
        (
            ViewType::Progress,
            json!({"tracks": [{"label": "Build", "bars": [{"value": 40}]}]}),
        ),
        (
            ViewType::Log,
            json!({"entries": [{"level": "error", "message": "fail"}]}),
        ),
        (
            ViewType::Tree,
            json!({"nodes": [{"id": "a"}], "edges": [{"from": "a", "to": "b"}]}),
        ),
        (
            ViewType::Poll,
            json!({"question": "?", "options": [{"text": "A", "votes": 5}]}),
        ),
    ]
}

/// A declared view payload, as a tool would emit it.
pub fn declared_chart() -> Value {
    json!({"type": "chart", "chartType": "pie", "data": [{"label": "A", "values": [1]}]})
}

/// Array of city records with coordinates.
pub fn city_rows() -> Value {
    json!([
        {"name": "London", "lat": 51.5, "lon": -0.1},
        {"name": "Paris", "lat": 48.9, "lon": 2.35},
        {"name": "Berlin", "lat": 52.5, "lon": 13.4}
    ])
}

/// Array of people with no special fields.
pub fn people_rows() -> Value {
    json!([{"name": "Alice", "age": 30}, {"name": "Bob", "age": 25}])
}
