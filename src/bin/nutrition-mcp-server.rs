// ABOUTME: Nutrition MCP server binary serving analyze_nutrition over stdio or HTTP
// ABOUTME: Loads configuration from the environment and builds shared resources once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition MCP Server Binary
//!
//! `--transport stdio` (default) speaks newline-delimited JSON-RPC on
//! stdin/stdout with logs on stderr. `--transport http` serves `POST /mcp`
//! and `GET /health`.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use nutrition_mcp_server::config::ServerConfig;
use nutrition_mcp_server::logging::{self, LogOutput};
use nutrition_mcp_server::mcp::resources::ServerResources;
use nutrition_mcp_server::mcp::transport::StdioTransport;
use nutrition_mcp_server::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Parser)]
#[command(name = "nutrition-mcp-server")]
#[command(about = "Nutrition analysis MCP server with a host-rendered tracker widget")]
struct Args {
    /// Transport to serve
    #[arg(long, value_enum, default_value = "stdio")]
    transport: Transport,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let output = match args.transport {
        Transport::Stdio => LogOutput::Stderr,
        Transport::Http => LogOutput::Stdout,
    };
    logging::init_from_env(output)?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());
    if config.environment.is_production() && !config.llm.credential_configured() {
        warn!("Running in production without an inference credential; every call without analyzedData will be deferred");
    }

    let port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(config).await?);

    let outcome: Result<()> = match args.transport {
        Transport::Stdio => StdioTransport::new(resources).run().await.map_err(Into::into),
        Transport::Http => routes::serve(resources, port).await,
    };

    if let Err(e) = &outcome {
        error!("Server error: {:#}", e);
    }
    outcome
}
