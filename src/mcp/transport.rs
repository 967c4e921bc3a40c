// ABOUTME: Newline-delimited JSON-RPC transport over stdin and stdout
// ABOUTME: One frame per line; stdout carries only protocol frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::sync::Arc;

use tokio::io::{
    stdin, stdout, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};

use super::request_processor::McpRequestProcessor;
use super::resources::ServerResources;

/// Handles stdio transport for MCP communication
pub struct StdioTransport {
    processor: McpRequestProcessor,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            processor: McpRequestProcessor::new(resources),
        }
    }

    /// Run until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin or writing stdout fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        self.serve(BufReader::new(stdin()), stdout()).await
    }

    /// Serve frames from any line reader to any writer
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await.map_err(io_error)? {
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.processor.handle_frame(&line).await else {
                continue;
            };

            match serde_json::to_string(&response) {
                Ok(mut json) => {
                    json.push('\n');
                    writer.write_all(json.as_bytes()).await.map_err(io_error)?;
                    writer.flush().await.map_err(io_error)?;
                }
                Err(e) => warn!("Failed to serialize MCP response: {}", e),
            }
        }

        info!("stdin closed, stdio transport stopping");
        Ok(())
    }
}

fn io_error(e: io::Error) -> AppError {
    AppError::internal(format!("stdio transport I/O failure: {e}"))
}
