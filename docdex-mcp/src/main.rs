//! docdex MCP Server
//!
//! A Model Context Protocol (MCP) server that exposes a directory of
//! documentation files to AI agents over stdio transport.
//!
//! ## Usage
//!
//! ```bash
//! # Start with the default document root (./docs)
//! docdex-mcp
//!
//! # Start with a custom document root
//! docdex-mcp --docs-dir /path/to/docs
//!
//! # Enable verbose logging
//! docdex-mcp --verbose
//! ```
//!
//! ## MCP Configuration
//!
//! Add to your MCP client configuration (e.g., Claude Desktop):
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "docdex": {
//!       "command": "docdex-mcp",
//!       "args": ["--docs-dir", "/path/to/docs"]
//!     }
//!   }
//! }
//! ```
//!
//! ## Available Tools
//!
//! - **list_documents**: Indexed document listing with metadata
//! - **read_document**: Retrieve full content by relative path
//! - **search_documents**: Term-frequency ranked full-text search
//! - **summarize_document**: First lines of a document

use anyhow::Result;
use clap::Parser;
use docdex::mcp::McpServer;
use docdex::{DocStore, Loader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// docdex MCP Server - Expose documentation search to AI agents via Model Context Protocol
#[derive(Parser, Debug)]
#[command(name = "docdex-mcp")]
#[command(
    author,
    version,
    about = "docdex MCP Server - Model Context Protocol interface for documentation search"
)]
struct Args {
    /// Path to the documentation root directory
    #[arg(long, short = 'd', env = "DOCDEX_DOCS_DIR", default_value = "./docs")]
    docs_dir: PathBuf,

    /// Enable verbose logging (outputs to stderr)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging to stderr (MCP uses stdout for protocol)
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        // By default, suppress all logging to avoid interfering with MCP protocol
        EnvFilter::new("error")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(
        "Starting docdex MCP server over document root: {}",
        args.docs_dir.display()
    );

    // Ensure the document root exists before opening it
    std::fs::create_dir_all(&args.docs_dir)?;

    let mut store = DocStore::open(&args.docs_dir)?;
    let stats = Loader::new(&mut store).load();
    tracing::info!(
        "index ready: {} documents ({} skipped)",
        stats.files_loaded,
        stats.errors
    );

    let server = McpServer::with_store(store);
    server.run()?;

    Ok(())
}
