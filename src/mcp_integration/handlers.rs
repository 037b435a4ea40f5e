//! Tool execution handlers for MCP integration
//!
//! Each handler runs the inference engine on already-decoded tool parameters
//! and wraps the outcome in a [`ViewToolResult`]. Argument problems come back
//! as failure results with an `error_code`.

use super::core::ViewToolResult;
use super::server::ViewMcpServer;
use crate::detection::ShapeProfile;
use crate::error::{InferenceError, InferenceResult};
use crate::registry::ViewType;
use log::warn;
use serde::Serialize;
use serde_json::{Value, json};

/// Handle single best view inference
pub fn handle_infer_view(server: &ViewMcpServer, data: Option<&Value>) -> ViewToolResult {
    let Some(data) = data else {
        return missing_data("infer_view");
    };

    let suggestion = server.inferrer.infer_view(data);
    match to_content(&suggestion) {
        Ok(content) => ViewToolResult::ok(content, "infer_view"),
        Err(e) => serialization_failed(e),
    }
}

/// Handle ranked view inference
pub fn handle_infer_views(
    server: &ViewMcpServer,
    data: Option<&Value>,
    limit: Option<&Value>,
) -> ViewToolResult {
    let Some(data) = data else {
        return missing_data("infer_views");
    };

    let limit = match parse_limit(limit) {
        Ok(limit) => limit.unwrap_or(server.inferrer.config().default_limit),
        Err(e) => return ViewToolResult::error(e.to_string(), "INVALID_LIMIT"),
    };

    let suggestions = server.inferrer.infer_views(data, limit);
    match to_content(&suggestions) {
        Ok(list) => ViewToolResult::ok(
            json!({
                "suggestions": list,
                "count": suggestions.len()
            }),
            "infer_views",
        ),
        Err(e) => serialization_failed(e),
    }
}

/// Handle shape profiling
pub fn handle_describe_shape(data: Option<&Value>) -> ViewToolResult {
    let Some(data) = data else {
        return missing_data("describe_shape");
    };

    match to_content(&ShapeProfile::of(data)) {
        Ok(content) => ViewToolResult::ok(content, "describe_shape"),
        Err(e) => serialization_failed(e),
    }
}

/// Handle listing of the known view types
pub fn handle_list_view_types() -> ViewToolResult {
    let names: Vec<&str> = ViewType::ALL.iter().map(|v| v.as_str()).collect();
    ViewToolResult::ok(
        json!({
            "view_types": names,
            "count": names.len()
        }),
        "list_view_types",
    )
}

/// Handle server information retrieval
pub fn handle_server_info(server: &ViewMcpServer) -> ViewToolResult {
    let config = server.inferrer.config();
    ViewToolResult::ok(
        json!({
            "name": server.server_info.name,
            "version": server.server_info.version,
            "description": server.server_info.description,
            "configuration": {
                "default_limit": config.default_limit,
                "sample_size": config.sample_size
            },
            "known_view_types": ViewType::ALL.len(),
            "mcp_integration": {
                "available_tools": server.tools().len()
            }
        }),
        "server_info",
    )
}

/// Interpret an optional `limit` argument.
///
/// Zero and negative integers mean "no suggestions"; anything that is not an
/// integer is rejected.
fn parse_limit(limit: Option<&Value>) -> InferenceResult<Option<usize>> {
    let Some(value) = limit else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    if let Some(n) = value.as_u64() {
        return Ok(Some(usize::try_from(n).unwrap_or(usize::MAX)));
    }
    if value.as_i64().is_some() {
        return Ok(Some(0));
    }
    Err(InferenceError::invalid_arguments(format!(
        "limit must be an integer, got {}",
        value
    )))
}

fn to_content<T: Serialize>(value: &T) -> InferenceResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn missing_data(tool: &str) -> ViewToolResult {
    ViewToolResult::error(
        format!("Missing required parameter 'data' for {}", tool),
        "MISSING_DATA",
    )
}

fn serialization_failed(error: InferenceError) -> ViewToolResult {
    warn!("Failed to serialize tool result: {}", error);
    ViewToolResult::error(error.to_string(), "SERIALIZATION_FAILED")
}
