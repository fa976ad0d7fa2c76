use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use clap::{Parser, ValueEnum};
use macos_use_mcp::audit::AuditLogger;
use macos_use_mcp::config::Config;
use macos_use_mcp::utils::init_logging;
use macos_use_mcp::MacosUseServer;
use macos_use_sdk::GrpcMacosUseClient;
use rmcp::{
    transport::sse_server::SseServer,
    transport::stdio,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ServiceExt,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "MacosUse MCP Server - macOS desktop automation via Model Context Protocol"
)]
struct Args {
    /// Transport mode to use
    #[arg(short, long, value_enum, env = "MCP_TRANSPORT", default_value = "stdio")]
    transport: TransportMode,

    /// Port to listen on (only used for SSE and HTTP transports)
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to (only used for SSE and HTTP transports)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable CORS for the HTTP transport
    #[arg(long)]
    cors: bool,

    #[command(flatten)]
    config: Config,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum TransportMode {
    /// Standard I/O transport (default)
    Stdio,
    /// Server-Sent Events transport for web integrations
    Sse,
    /// Streamable HTTP transport for HTTP-based clients
    Http,
}

fn build_server(config: Config) -> Result<(MacosUseServer, Arc<AuditLogger>)> {
    config.validate().context("invalid configuration")?;

    let client = GrpcMacosUseClient::connect_lazy(&config.server_addr, config.connect_timeout())
        .with_context(|| format!("cannot use server address '{}'", config.server_addr))?;
    let audit = AuditLogger::new(config.audit_log_file.as_deref())?;
    if audit.is_enabled() {
        info!("Audit logging enabled");
    }

    let server = MacosUseServer::new(Arc::new(client), config, audit);
    let audit = server.audit_handle();
    Ok((server, audit))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.config.log_dir.as_deref())?;

    info!("Initializing MacosUse MCP server...");
    info!("Transport mode: {:?}", args.transport);
    info!("MacosUse server address: {}", args.config.server_addr);
    if args.config.shell_commands_enabled {
        info!("Shell command execution is enabled");
    }

    let (server, audit) = build_server(args.config.clone())?;
    info!("Registered {} tools", server.registry().len());

    match args.transport {
        TransportMode::Stdio => {
            info!("Starting stdio transport...");
            let service = server.serve(stdio()).await.inspect_err(|e| {
                error!("Serving error: {:?}", e);
            })?;

            service.waiting().await?;
        }
        TransportMode::Sse => {
            let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

            if args.cors {
                error!("SSE transport does not support CORS");
                info!("Use HTTP transport for CORS support:");
                info!("   macos-use-mcp -t http --cors --port {}", args.port);
                return Ok(());
            }

            info!("Starting SSE server on http://{}", addr);
            let ct = SseServer::serve(addr)
                .await?
                .with_service(move || server.clone());

            info!("SSE endpoint: http://{}/sse", addr);
            info!("Message endpoint: http://{}/message", addr);
            info!("Press Ctrl+C to stop");

            tokio::signal::ctrl_c().await?;
            ct.cancel();
            info!("Shutting down SSE server");
        }
        TransportMode::Http => {
            let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
            info!("Starting streamable HTTP server on http://{}", addr);

            let service = StreamableHttpService::new(
                move || Ok(server.clone()),
                LocalSessionManager::default().into(),
                Default::default(),
            );

            let mut router = Router::new()
                .route("/", get(root_handler))
                .route("/health", get(health_check))
                .nest_service("/mcp", service);
            if args.cors {
                router = router.layer(CorsLayer::permissive());
            }

            let tcp_listener = tokio::net::TcpListener::bind(addr).await?;

            info!("Streamable HTTP server running on http://{addr}");
            if args.cors {
                info!("CORS enabled - accessible from web browsers");
            }
            info!("MCP client endpoint: http://{addr}/mcp");
            info!("Health check: http://{addr}/health");
            info!("Press Ctrl+C to stop");

            axum::serve(tcp_listener, router)
                .with_graceful_shutdown(async {
                    tokio::signal::ctrl_c().await.ok();
                })
                .await?;

            info!("Shutting down HTTP server");
        }
    }

    audit.close();
    Ok(())
}

async fn root_handler() -> impl axum::response::IntoResponse {
    (
        axum::http::StatusCode::OK,
        axum::Json(serde_json::json!({
            "name": "MacosUse MCP Server",
            "description": "macOS desktop automation via Model Context Protocol",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "/": "This endpoint - lists available endpoints",
                "/mcp": "MCP protocol endpoint - connect your MCP client here",
                "/health": "Health check"
            }
        })),
    )
}

async fn health_check() -> impl axum::response::IntoResponse {
    (
        axum::http::StatusCode::OK,
        axum::Json(serde_json::json!({"status": "ok"})),
    )
}
