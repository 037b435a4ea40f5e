//! MCP Stdio Server Example
//!
//! Runs the view inference engine as an MCP server over stdin/stdout.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example mcp_stdio_server --features mcp
//! ```
//!
//! ## Example MCP Messages
//!
//! ### Initialize the server:
//! ```json
//! {"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}
//! ```
//!
//! ### List available tools:
//! ```json
//! {"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}
//! ```
//!
//! ### Ask for the best view:
//! ```json
//! {"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"infer_views","arguments":{"data":[{"lat":51.5,"lon":-0.1}],"limit":2}}}
//! ```

use view_inference::ViewInferrer;
use view_inference::mcp_integration::{McpServerInfo, ViewMcpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let inferrer = ViewInferrer::builder().with_default_limit(3).build()?;
    let mcp_server = ViewMcpServer::with_info(
        inferrer,
        McpServerInfo {
            name: "View Inference MCP Server".to_string(),
            ..McpServerInfo::default()
        },
    );

    let tools = mcp_server.tools();
    eprintln!("🔧 Available MCP Tools ({} total):", tools.len());
    for (i, tool) in tools.iter().enumerate() {
        let description = tool.description.as_deref().unwrap_or("No description");
        eprintln!("{}. {} - {}", i + 1, tool.name, description);
    }
    eprintln!("📡 Listening for JSON-RPC messages on stdin (EOF to stop)");

    mcp_server.run_stdio().await?;

    eprintln!("✅ View inference MCP server shutdown complete");
    Ok(())
}
