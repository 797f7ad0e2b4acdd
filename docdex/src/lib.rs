//! # docdex
//!
//! An in-memory full-text index over a directory of documentation files,
//! exposed to AI agents through the Model Context Protocol.
//!
//! docdex provides:
//! - **Inverted-index keyword search** with term-frequency scoring and
//!   context snippets
//! - **Document listing and retrieval** with path-containment checks
//! - **MCP server** over stdio for AI agent integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docdex::{DocStore, Loader, Searcher};
//!
//! // Build the index once at startup
//! let mut store = DocStore::open("./docs").unwrap();
//! let stats = Loader::new(&mut store).load();
//! println!("indexed {} documents", stats.files_loaded);
//!
//! // Search (read-only from here on)
//! let results = Searcher::new(store.index()).search("bgp router", 10);
//! ```

pub mod error;
pub mod extract;
pub mod index;
pub mod loader;
pub mod mcp;
pub mod scanner;
pub mod search;
pub mod store;

// Re-exports for convenience
pub use error::{Error, Result};
pub use index::{tokenize, InvertedIndex};
pub use loader::{LoadStats, Loader};
pub use search::{SearchResult, Searcher, DEFAULT_RESULT_LIMIT};
pub use store::{DocStore, DocumentInfo, DEFAULT_SUMMARY_LINES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Detect if content is binary using NUL-byte check (ripgrep strategy)
pub fn is_binary(content: &[u8]) -> bool {
    // Check first 8KB for NUL bytes
    content.iter().take(8192).any(|&b| b == 0)
}

/// Take the first `max_lines` lines of text, newline-joined.
///
/// # Examples
/// ```
/// use docdex::first_lines;
///
/// let content = "line1\nline2\nline3\nline4";
/// assert_eq!(first_lines(content, 2), "line1\nline2");
/// assert_eq!(first_lines(content, 10), "line1\nline2\nline3\nline4");
/// assert_eq!(first_lines(content, 0), "");
/// ```
pub fn first_lines(content: &str, max_lines: usize) -> String {
    content
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n")
}
