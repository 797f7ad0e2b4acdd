//! MCP tool handlers for docdex
//!
//! Each tool handler processes a specific tool call and returns results.
//! Store failures (access denied, not found) come back as `Error: ...`
//! text results so one bad call never takes down the session; malformed
//! requests (missing arguments, unknown tools) are JSON-RPC errors.

use super::protocol::{JsonRpcError, ToolDefinition, ToolResult};
use crate::search::{Searcher, DEFAULT_RESULT_LIMIT};
use crate::store::{DocStore, DEFAULT_SUMMARY_LINES};
use serde_json::{json, Value};

/// Get all tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_documents".to_string(),
            description: "List all indexed documentation files with metadata".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolDefinition {
            name: "read_document".to_string(),
            description: "Read the complete content of a specific documentation file"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Relative path to the documentation file"
                    }
                },
                "required": ["path"]
            }),
        },
        ToolDefinition {
            name: "search_documents".to_string(),
            description:
                "Full-text search across all documentation with ranked results and snippets"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query (searches all document content)"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results to return (default: 10)",
                        "default": 10
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "summarize_document".to_string(),
            description: "Get a brief summary (first few lines) of a documentation file"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Relative path to the documentation file"
                    },
                    "max_lines": {
                        "type": "integer",
                        "description": "Maximum number of lines to include (default: 5)",
                        "default": 5
                    }
                },
                "required": ["path"]
            }),
        },
    ]
}

/// Handle tool call dispatch
pub fn handle_tool_call(
    store: &DocStore,
    tool_name: &str,
    arguments: &Value,
) -> Result<ToolResult, JsonRpcError> {
    match tool_name {
        "list_documents" => tool_list(store),
        "read_document" => tool_read(store, arguments),
        "search_documents" => tool_search(store, arguments),
        "summarize_document" => tool_summarize(store, arguments),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            tool_name
        ))),
    }
}

/// Execute list tool (list_documents)
fn tool_list(store: &DocStore) -> Result<ToolResult, JsonRpcError> {
    let docs = store.list_documents();

    let text = serde_json::to_string_pretty(&docs)
        .map_err(|e| JsonRpcError::server_error(e.to_string()))?;

    Ok(ToolResult::text(text))
}

/// Execute read tool (read_document)
fn tool_read(store: &DocStore, args: &Value) -> Result<ToolResult, JsonRpcError> {
    let path = args
        .get("path")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params("Missing path parameter"))?;

    match store.read_document(path) {
        Ok(content) => Ok(ToolResult::text(format!(
            "Content of {}:\n\n{}",
            path, content
        ))),
        Err(e) => {
            tracing::error!("read_document failed for {}: {}", path, e);
            Ok(ToolResult::text(format!("Error: {}", e)))
        }
    }
}

/// Execute search tool (search_documents)
fn tool_search(store: &DocStore, args: &Value) -> Result<ToolResult, JsonRpcError> {
    let query = args
        .get("query")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params("Missing query parameter"))?;

    let max_results = args
        .get("max_results")
        .and_then(|v| v.as_u64())
        .unwrap_or(DEFAULT_RESULT_LIMIT as u64) as usize;

    let searcher = Searcher::new(store.index());
    let results = searcher.search(query, max_results);

    let text = serde_json::to_string_pretty(&results)
        .map_err(|e| JsonRpcError::server_error(e.to_string()))?;

    Ok(ToolResult::text(text))
}

/// Execute summarize tool (summarize_document)
fn tool_summarize(store: &DocStore, args: &Value) -> Result<ToolResult, JsonRpcError> {
    let path = args
        .get("path")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params("Missing path parameter"))?;

    let max_lines = args
        .get("max_lines")
        .and_then(|v| v.as_u64())
        .unwrap_or(DEFAULT_SUMMARY_LINES as u64) as usize;

    match store.summarize(path, max_lines) {
        Ok(summary) => Ok(ToolResult::text(format!(
            "Summary of {}:\n\n{}",
            path, summary
        ))),
        Err(e) => {
            tracing::error!("summarize_document failed for {}: {}", path, e);
            Ok(ToolResult::text(format!("Error: {}", e)))
        }
    }
}
