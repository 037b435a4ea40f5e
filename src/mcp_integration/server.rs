//! MCP server handler for view inference.
//!
//! Tools are registered through the rmcp tool router; each tool body delegates
//! to a handler in [`super::handlers`] and renders its [`ViewToolResult`].
//!
//! - `infer_view` - Single best view for a payload
//! - `infer_views` - Ranked views, up to `limit`
//! - `describe_shape` - Shape facts (GeoJSON, tabular, time series, ...)
//! - `list_view_types` - The known view type registry
//! - `server_info` - Server identity and engine configuration

use super::core::{McpServerInfo, ViewToolResult};
use super::handlers;
use super::params::{DataParams, InferViewsParams};
use crate::error::{InferenceError, InferenceResult};
use crate::inference::ViewInferrer;
use log::{debug, info};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::transport::IntoTransport;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt, tool, tool_handler, tool_router,
};

/// MCP server wrapper around a [`ViewInferrer`]
///
/// # Examples
///
/// ```rust,no_run
/// use view_inference::mcp_integration::ViewMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mcp_server = ViewMcpServer::default();
///     println!("Available tools: {}", mcp_server.tools().len());
///     mcp_server.run_stdio().await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ViewMcpServer {
    tool_router: ToolRouter<Self>,
    pub(crate) inferrer: ViewInferrer,
    pub(crate) server_info: McpServerInfo,
}

impl Default for ViewMcpServer {
    fn default() -> Self {
        Self::new(ViewInferrer::default())
    }
}

impl ViewMcpServer {
    /// Create a new MCP server around the given inferrer
    pub fn new(inferrer: ViewInferrer) -> Self {
        Self::with_info(inferrer, McpServerInfo::default())
    }

    /// Create a new MCP server with custom server information
    pub fn with_info(inferrer: ViewInferrer, server_info: McpServerInfo) -> Self {
        Self {
            tool_router: Self::tool_router(),
            inferrer,
            server_info,
        }
    }

    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }

    pub fn inferrer(&self) -> &ViewInferrer {
        &self.inferrer
    }

    /// Definitions of the registered tools, as advertised by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Serve MCP over any rmcp transport until the peer disconnects.
    pub async fn serve_transport<T, E, A>(self, transport: T) -> InferenceResult<()>
    where
        T: IntoTransport<RoleServer, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = self
            .serve(transport)
            .await
            .map_err(|e| InferenceError::transport(e.to_string()))?;
        let reason = service
            .waiting()
            .await
            .map_err(|e| InferenceError::transport(e.to_string()))?;
        info!("MCP session ended: {:?}", reason);
        Ok(())
    }

    /// Run the MCP server using stdio communication
    ///
    /// Returns once stdin reaches EOF.
    pub async fn run_stdio(self) -> InferenceResult<()> {
        info!("View inference MCP server ready for stdio communication");
        info!(
            "Available tools: {:?}",
            self.tools().iter().map(|t| t.name.as_ref()).collect::<Vec<&str>>()
        );
        self.serve_transport(rmcp::transport::io::stdio()).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ViewMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.server_info.name.clone(),
                title: None,
                version: self.server_info.version.clone(),
                description: Some(self.server_info.description.clone()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Suggests which view type best presents a JSON payload. \
                 Call infer_views with the tool output under `data` before wrapping it \
                 in a view; list_view_types shows every name a suggestion can carry."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl ViewMcpServer {
    #[tool(
        name = "infer_view",
        description = "Suggest the single best view type for a JSON payload"
    )]
    pub async fn infer_view(
        &self,
        Parameters(params): Parameters<DataParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Executing MCP tool: infer_view");
        Ok(handlers::handle_infer_view(self, params.data.as_ref()).into_call_result())
    }

    #[tool(
        name = "infer_views",
        description = "Rank up to `limit` view types for a JSON payload, highest confidence first"
    )]
    pub async fn infer_views(
        &self,
        Parameters(params): Parameters<InferViewsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Executing MCP tool: infer_views");
        let result: ViewToolResult =
            handlers::handle_infer_views(self, params.data.as_ref(), params.limit.as_ref());
        Ok(result.into_call_result())
    }

    #[tool(
        name = "describe_shape",
        description = "Report structural facts about a JSON payload: GeoJSON, tabular, time series, hierarchical, numeric heavy"
    )]
    pub async fn describe_shape(
        &self,
        Parameters(params): Parameters<DataParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Executing MCP tool: describe_shape");
        Ok(handlers::handle_describe_shape(params.data.as_ref()).into_call_result())
    }

    #[tool(
        name = "list_view_types",
        description = "List every view type name a suggestion can carry"
    )]
    pub async fn list_view_types(&self) -> Result<CallToolResult, McpError> {
        debug!("Executing MCP tool: list_view_types");
        Ok(handlers::handle_list_view_types().into_call_result())
    }

    #[tool(
        name = "server_info",
        description = "Get server identity and inference engine configuration"
    )]
    pub async fn describe_server(&self) -> Result<CallToolResult, McpError> {
        debug!("Executing MCP tool: server_info");
        Ok(handlers::handle_server_info(self).into_call_result())
    }
}
