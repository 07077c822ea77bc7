//! PublishRun MCP Server
//!
//! Serves the publishing tools over stdio. Logs go to stderr so they never
//! interleave with protocol messages on stdout.

use std::sync::Arc;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use publishrun_client::BackendClient;
use publishrun_server::{Args, Config, PublishMcpServer, Publisher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("publishrun={}", args.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::try_from(args)?;

    info!(
        base_url = %config.base_url,
        tools = ?config.tools.enabled(),
        "Starting PublishRun MCP server"
    );

    let backend = Arc::new(BackendClient::new(&config.base_url));
    let server = PublishMcpServer::new(Publisher::new(backend), &config.website_url, &config.tools);

    let service = server.serve(stdio()).await?;
    let reason = service.waiting().await?;

    info!(reason = ?reason, "PublishRun MCP server stopped");
    Ok(())
}
