//! MCP (Model Context Protocol) server for docdex
//!
//! This module implements an MCP server using stdio transport, exposing
//! the document index to AI agents.
//!
//! ## Tools Exposed
//!
//! - `list_documents` - Indexed document listing with metadata
//! - `read_document` - Retrieve full content by relative path
//! - `search_documents` - Term-frequency ranked full-text search
//! - `summarize_document` - First lines of a document
//!
//! Documents are also published as MCP resources under `doc:///` URIs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docdex::mcp::McpServer;
//!
//! fn main() {
//!     let server = McpServer::open("./docs").unwrap();
//!     server.run().unwrap();
//! }
//! ```

mod protocol;
mod server;
pub mod tools;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolDefinition, ToolResult};
pub use server::{McpServer, RESOURCE_URI_SCHEME};
