//! Todo MCP Server - Main Entry Point
//!
//! This is the main entry point for the todo MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_mcp::{Config, TodoServerHandler};
use tracing_subscriber::EnvFilter;

/// Todo MCP Server - todo list management via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the todo data file
    file: String,

    /// Path to a TOML config file (due_soon_days, categories)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level written to stderr; RUST_LOG overrides it
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Log to stderr; stdout carries the MCP transport
fn setup_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("todo_mcp={},warn", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    setup_tracing(&args.log_level);

    let config = Config::load(args.config.as_deref())?;
    let handler = TodoServerHandler::new(&args.file, config)?;
    tracing::info!(file = %args.file, "serving todo MCP over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
