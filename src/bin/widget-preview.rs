// ABOUTME: Renders a tool response envelope as plain text the way the widget would show it
// ABOUTME: Reads JSON from a file or stdin and optionally expands ingredient breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Widget Preview
//!
//! ```bash
//! widget-preview response.json --expand 0
//! echo '{"loggedMeals": []}' | widget-preview
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

use nutrition_mcp_server::logging::{self, LogOutput};
use nutrition_mcp_server::widget::{render_text, WidgetSession};

#[derive(Parser)]
#[command(name = "widget-preview")]
#[command(about = "Preview the nutrition tracker widget for a response envelope")]
struct Args {
    /// Envelope JSON file; stdin when omitted
    input: Option<PathBuf>,

    /// Expand the ingredient breakdown of the meal at this index (repeatable)
    #[arg(long = "expand", value_name = "INDEX")]
    expand: Vec<usize>,

    /// Print the derived render state instead of the rendering
    #[arg(long)]
    state: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env(LogOutput::Stderr)?;

    let raw = read_input(args.input.as_ref())?;
    let envelope: Value = serde_json::from_str(&raw).context("Envelope is not valid JSON")?;

    let mut session = WidgetSession::new();
    session.receive(envelope);
    for index in &args.expand {
        if session.toggle_breakdown(*index).is_none() {
            eprintln!("Meal {index} has no ingredient breakdown");
        }
    }

    let text = if args.state {
        format!("{}\n", session.state().label())
    } else {
        render_text(&session.view())
    };

    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}
