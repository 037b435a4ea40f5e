//! Basic View Inference Example
//!
//! Runs the inference engine over a handful of typical tool outputs and
//! prints the ranked suggestions for each.

use serde_json::json;
use view_inference::{ShapeProfile, ViewInferrer, infer_view};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    println!("🚀 Starting View Inference Basic Usage Example");

    let payloads = [
        (
            "declared chart",
            json!({"type": "chart", "chartType": "bar", "data": []}),
        ),
        (
            "map layers",
            json!({"layers": [{"features": []}], "center": {"lat": 51.5, "lon": -0.1}}),
        ),
        (
            "site list",
            json!([
                {"name": "London", "lat": 51.5, "lon": -0.1},
                {"name": "Paris", "lat": 48.9, "lon": 2.35}
            ]),
        ),
        (
            "monthly totals",
            json!([{"label": "Jan", "value": 100}, {"label": "Feb", "value": 200}]),
        ),
        ("source file", json!("import os\n\ndef main():\n    pass")),
        ("release notes", json!("## 1.2.0\n- **faster** startup")),
        ("metric", json!(42)),
    ];

    let inferrer = ViewInferrer::builder().with_default_limit(3).build()?;

    for (label, payload) in &payloads {
        println!("\n📦 {}", label);
        for suggestion in inferrer.suggest(payload) {
            println!("   • {}", suggestion);
        }
    }

    // Shape facts are available independently of the ranked suggestions
    let readings = json!([
        {"timestamp": "2024-01-01T00:00:00Z", "celsius": 4.5},
        {"timestamp": "2024-01-01T01:00:00Z", "celsius": 4.1},
        {"timestamp": "2024-01-01T02:00:00Z", "celsius": 3.8}
    ]);
    let profile = ShapeProfile::of(&readings);
    println!("\n🔎 Sensor readings profile: {}", serde_json::to_string(&profile)?);
    println!("   Best view: {}", infer_view(&readings));

    println!("\n✅ Example complete");
    Ok(())
}
