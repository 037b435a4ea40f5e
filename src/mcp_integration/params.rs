//! Parameter structs for the MCP tools.
//!
//! Input schemas advertised in `tools/list` are generated from these types.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parameters for the `infer_view` and `describe_shape` tools.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DataParams {
    /// Payload to analyze. `None` only when the key is absent; an explicit
    /// JSON `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    #[schemars(
        with = "Value",
        description = "Payload to analyze (object, array, string, number, ...)"
    )]
    pub data: Option<Value>,
}

/// Parameters for the `infer_views` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct InferViewsParams {
    #[serde(default, deserialize_with = "present")]
    #[schemars(
        with = "Value",
        description = "Payload to analyze (object, array, string, number, ...)"
    )]
    pub data: Option<Value>,

    /// Kept untyped so a non-integer limit is reported as `INVALID_LIMIT`.
    #[serde(default)]
    #[schemars(
        with = "Option<i64>",
        description = "Maximum number of suggestions (default 3); zero or negative returns none"
    )]
    pub limit: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
