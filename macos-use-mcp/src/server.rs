use crate::audit::AuditLogger;
use crate::config::Config;
use crate::errors::ToolError;
use crate::helpers::error_result;
use crate::prompt::get_server_instructions;
use crate::registry::ToolRegistry;
use crate::validation::validate_tool_input;
use futures::FutureExt;
use macos_use_sdk::MacosUseClient;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::{json, Value};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tonic::Status;
use tracing::{debug, info, warn};

/// The MCP server. Cloned per session by the HTTP transports; all state is shared.
#[derive(Clone)]
pub struct MacosUseServer {
    client: Arc<dyn MacosUseClient>,
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
    audit: Arc<AuditLogger>,
    tool_router: ToolRouter<Self>,
}

/// Prefix rmcp puts on argument deserialization failures.
const DESERIALIZE_PREFIX: &str = "failed to deserialize parameters: ";

impl MacosUseServer {
    pub fn new(client: Arc<dyn MacosUseClient>, config: Config, audit: AuditLogger) -> Self {
        let tool_router = Self::tool_router();
        Self {
            client,
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::from_tools(tool_router.list_all())),
            audit: Arc::new(audit),
            tool_router,
        }
    }

    pub fn client(&self) -> &dyn MacosUseClient {
        self.client.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Shared handle for closing the audit log after the transport stops.
    pub fn audit_handle(&self) -> Arc<AuditLogger> {
        Arc::clone(&self.audit)
    }

    /// Deadline for work started now, per `request_timeout`.
    pub fn deadline(&self) -> tokio::time::Instant {
        tokio::time::Instant::now() + self.config.request_timeout()
    }

    /// Runs one remote call under the request deadline and formats failures for `tool`.
    pub async fn call<T, F>(&self, tool: &str, rpc: F) -> Result<T, ToolError>
    where
        F: Future<Output = Result<T, Status>>,
    {
        match tokio::time::timeout(self.config.request_timeout(), rpc).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(status)) => Err(ToolError::remote(&status, tool)),
            Err(_) => {
                let status = Status::deadline_exceeded(format!(
                    "no response within {}s",
                    self.config.request_timeout
                ));
                Err(ToolError::remote(&status, tool))
            }
        }
    }

    /// Validates, dispatches and audits one tool call.
    ///
    /// Schema violations and unknown tools are protocol errors; everything
    /// else, including a panicking handler, becomes an `isError` result.
    async fn handle_tool_call(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let started = Instant::now();
        let name = request.name.to_string();
        let raw_args = request
            .arguments
            .as_ref()
            .map(|args| Value::Object(args.clone()).to_string())
            .unwrap_or_default();

        if let Some(response) =
            validate_tool_input(&name, request.arguments.as_ref(), &self.registry)
        {
            warn!("Rejected arguments for {}: {}", name, response.error.message);
            self.audit
                .log_tool_call(&name, &raw_args, "invalid_params", started.elapsed());
            return Err(McpError::invalid_params(
                response.error.message,
                Some(json!({"tool": name})),
            ));
        }

        if !self.registry.contains(&name) {
            self.audit
                .log_tool_call(&name, &raw_args, "unknown_tool", started.elapsed());
            return Err(McpError::invalid_params(format!("Unknown tool: {name}"), None));
        }

        let call = self
            .tool_router
            .call(ToolCallContext::new(self, request, context));
        let outcome = AssertUnwindSafe(call).catch_unwind().await;

        let result = match outcome {
            Ok(Ok(result)) => result,
            // The router only fails when the arguments do not deserialize.
            Ok(Err(err)) => {
                let message: &str = &err.message;
                let message = message
                    .strip_prefix(DESERIALIZE_PREFIX)
                    .unwrap_or(message)
                    .to_string();
                CallToolResult::from(ToolError::InvalidArguments {
                    tool: name.clone(),
                    message,
                })
            }
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!("Tool {} panicked: {}", name, reason);
                error_result(format!("Internal error in {name}: {reason}"))
            }
        };

        let status = if result.is_error == Some(true) {
            "error"
        } else {
            "success"
        };
        let elapsed = started.elapsed();
        self.audit.log_tool_call(&name, &raw_args, status, elapsed);
        debug!(tool = %name, status, duration_ms = elapsed.as_millis() as u64, "Tool call finished");

        Ok(result)
    }
}

impl ServerHandler for MacosUseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(get_server_instructions(self.config.shell_commands_enabled)),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.to_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.to_string();
        info!("Tool call: {}", name);
        let cancelled = context.ct.clone();

        tokio::select! {
            result = self.handle_tool_call(request, context) => result,
            _ = cancelled.cancelled() => {
                self.audit.log_tool_call(&name, "", "cancelled", Default::default());
                Err(McpError::internal_error(
                    format!("{name} cancelled"),
                    Some(json!({"code": -32001, "tool": name})),
                ))
            }
        }
    }
}
