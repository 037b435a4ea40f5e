//! View inference for MCP tool output.
//!
//! Given an arbitrary, untyped JSON payload, this crate guesses which of the
//! known view types (map, chart, datatable, ...) best presents it, returning
//! ranked, deduplicated suggestions with confidence scores and reasons.
//!
//! # Core Components
//!
//! - [`infer_view`] / [`infer_views`] - Best suggestion, or the top N
//! - [`ViewInferrer`] - Configurable engine behind the free functions
//! - [`ViewType`] - Closed registry of known view type identifiers
//! - [`detection`] - Standalone shape predicates (GeoJSON, tabular, time series)
//!
//! # Quick Start
//!
//! ```rust
//! use view_inference::{infer_view, infer_views, ViewType};
//! use serde_json::json;
//!
//! let best = infer_view(&json!({"layers": [{"features": []}], "center": {"lat": 51, "lon": 0}}));
//! assert_eq!(best.view(), ViewType::Map);
//!
//! for suggestion in infer_views(&json!([{"label": "Jan", "value": 100}]), 3) {
//!     println!("{}", suggestion);
//! }
//! ```
//!
//! Inference is a best-effort heuristic: it never validates the payload
//! against the suggested view's schema and never fails.

pub mod detection;
pub mod error;
pub mod inference;
/// Model Context Protocol integration for AI agents.
///
/// This module is only available when the `mcp` feature is enabled.
#[cfg(feature = "mcp")]
pub mod mcp_integration;
pub mod registry;

// Re-export commonly used types for convenience
pub use detection::ShapeProfile;
pub use error::{InferenceError, InferenceResult};
pub use inference::{
    InferenceConfig, ViewInferrer, ViewInferrerBuilder, ViewSuggestion, infer_view, infer_views,
};
pub use registry::{ViewType, is_known_view_type};

/// Model Context Protocol integration types.
///
/// These types are only available when the `mcp` feature is enabled.
#[cfg(feature = "mcp")]
pub use mcp_integration::{McpServerInfo, ViewMcpServer, ViewToolResult};
