//! Data-shape inference engine.
//!
//! Given an arbitrary JSON payload, the engine guesses which view types best
//! present it and returns ranked suggestions with confidence scores and
//! human-readable reasons.
//!
//! # Pipeline
//!
//! ```text
//! payload ─▶ dispatch on root kind ─▶ classifier cascade ─▶ rank/dedup/limit
//!            object | array | string | number | other
//! ```
//!
//! Every classifier ends in a fallback, so any payload yields at least one
//! suggestion when the limit is non-zero. Only a bounded prefix of arrays is
//! ever inspected, keeping the cost independent of payload size.
//!
//! # Examples
//!
//! ```rust
//! use view_inference::{infer_view, infer_views, ViewType};
//! use serde_json::json;
//!
//! let best = infer_view(&json!({"type": "chart", "chartType": "bar", "data": []}));
//! assert_eq!(best.view(), ViewType::Chart);
//! assert_eq!(best.confidence(), 1.0);
//!
//! let ranked = infer_views(&json!([{"lat": 51.5, "lon": -0.1, "name": "London"}]), 3);
//! assert_eq!(ranked[0].view(), ViewType::Map);
//! ```

mod engine;
mod object;
mod ranking;
mod scalar;
mod sequence;
mod suggestion;
mod text;


pub use engine::{
    DEFAULT_LIMIT, DEFAULT_SAMPLE_SIZE, InferenceConfig, ViewInferrer, ViewInferrerBuilder,
};
pub(crate) use engine::payload_kind;
pub use suggestion::ViewSuggestion;

use serde_json::Value;

/// Return the best-scoring view suggestion for `data`.
pub fn infer_view(data: &Value) -> ViewSuggestion {
    ViewInferrer::new().infer_view(data)
}

/// Return up to `limit` view suggestions for `data`, highest confidence first.
pub fn infer_views(data: &Value, limit: usize) -> Vec<ViewSuggestion> {
    ViewInferrer::new().infer_views(data, limit)
}
