//! MCP (Model Context Protocol) integration for view inference
//!
//! Exposes the inference engine as tools AI agents can discover and call,
//! so a host can ask which view should render a tool's output before
//! wrapping it in a view payload.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   AI Agent      │───▶│  MCP Protocol    │───▶│  ViewInferrer   │
//! │   (Client)      │    │  (This Module)   │    │  (Engine)       │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - `core` - Server info and the tool result envelope
//! - `server` - rmcp `ServerHandler`, tool registration and stdio serving
//! - `params` - Tool parameter types, from which input schemas are generated
//! - `handlers` - Tool execution handlers
//!
//! JSON-RPC framing, the `initialize` handshake and method dispatch are handled
//! by rmcp.
//!
//! ## Usage Example
//!
//! ```rust
//! use view_inference::mcp_integration::ViewMcpServer;
//! use view_inference::mcp_integration::params::DataParams;
//! use rmcp::handler::server::wrapper::Parameters;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mcp_server = ViewMcpServer::default();
//! let result = mcp_server
//!     .infer_view(Parameters(DataParams {
//!         data: Some(json!({"columns": [], "rows": []})),
//!     }))
//!     .await
//!     .unwrap();
//! assert_eq!(result.structured_content.unwrap()["view"], "datatable");
//! # }
//! ```

pub mod core;
pub mod handlers;
pub mod params;
pub mod server;


pub use self::core::{McpServerInfo, ViewToolResult};
pub use server::ViewMcpServer;
