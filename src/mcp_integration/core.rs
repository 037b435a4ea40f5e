//! Core MCP integration types
//!
//! This module contains the server's discovery metadata and the tool result
//! envelope shared by the server and handler modules.

use rmcp::model::CallToolResult;
use serde_json::{Value, json};

/// Information about the MCP server for AI agent discovery
///
/// # Examples
///
/// ```rust
/// use view_inference::mcp_integration::McpServerInfo;
///
/// let server_info = McpServerInfo {
///     name: "Dashboard View Advisor".to_string(),
///     version: "1.2.0".to_string(),
///     description: "Suggests views for dashboard tool output".to_string(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Human-readable name of the server
    pub name: String,
    /// Version string for the server implementation
    pub version: String,
    /// Description of the server's purpose
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "view-inference".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Suggests the best view type for arbitrary JSON payloads".to_string(),
        }
    }
}

/// Tool execution result for MCP clients
///
/// # Examples
///
/// ```rust
/// use view_inference::mcp_integration::ViewToolResult;
/// use serde_json::json;
///
/// let result = ViewToolResult {
///     success: true,
///     content: json!({"view": "map", "confidence": 0.95, "reason": "..."}),
///     metadata: Some(json!({"operation": "infer_view"})),
/// };
/// assert!(result.success);
/// ```
#[derive(Debug, Clone)]
pub struct ViewToolResult {
    /// Whether the tool execution was successful
    pub success: bool,
    /// The main result content (suggestions or error information)
    pub content: Value,
    /// Optional metadata providing additional context about the operation
    pub metadata: Option<Value>,
}

impl ViewToolResult {
    pub(crate) fn ok(content: Value, operation: &str) -> Self {
        Self {
            success: true,
            content,
            metadata: Some(json!({ "operation": operation })),
        }
    }

    pub(crate) fn error(message: impl Into<String>, error_code: &str) -> Self {
        Self {
            success: false,
            content: json!({
                "error": message.into(),
                "error_code": error_code
            }),
            metadata: None,
        }
    }

    /// Render as an MCP `tools/call` result, carrying the content both as
    /// text and as structured content.
    pub fn into_call_result(self) -> CallToolResult {
        if self.success {
            CallToolResult::structured(self.content)
        } else {
            CallToolResult::structured_error(self.content)
        }
    }
}
