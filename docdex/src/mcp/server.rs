//! MCP server implementation
//!
//! Implements the stdio transport for the Model Context Protocol.

use super::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ResourceContent, ResourceDefinition,
    ServerCapabilities, ServerInfo, ToolResult, MCP_PROTOCOL_VERSION,
};
use super::tools::{get_tool_definitions, handle_tool_call};
use crate::loader::Loader;
use crate::store::DocStore;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// URI scheme under which documents are exposed as MCP resources
pub const RESOURCE_URI_SCHEME: &str = "doc:///";

/// MCP server for docdex
///
/// Implements the Model Context Protocol over stdio, exposing document
/// listing, retrieval, search, and summarization to AI agents.
pub struct McpServer {
    store: DocStore,
}

impl McpServer {
    /// Create a server over a document root, indexing it up front.
    pub fn open<P: AsRef<Path>>(root: P) -> crate::Result<Self> {
        let mut store = DocStore::open(root)?;
        Loader::new(&mut store).load();
        Ok(Self { store })
    }

    /// Create a server over an already-populated store.
    pub fn with_store(store: DocStore) -> Self {
        Self { store }
    }

    /// Run the MCP server on stdio
    ///
    /// This method blocks and handles requests until EOF is received
    /// or an error occurs.
    pub fn run(&self) -> crate::Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut reader = BufReader::new(stdin.lock());
        let mut writer = stdout.lock();

        tracing::info!(
            "docdex MCP server started (protocol version {}, {} documents)",
            MCP_PROTOCOL_VERSION,
            self.store.index().len()
        );

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => {
                    tracing::info!("EOF received, shutting down");
                    break;
                }
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    tracing::debug!("Received: {}", line);

                    match serde_json::from_str::<JsonRpcRequest>(line) {
                        Ok(request) => {
                            let response = self.handle_request(request);
                            let response_json = serde_json::to_string(&response)?;
                            writeln!(writer, "{}", response_json)?;
                            writer.flush()?;
                            tracing::debug!("Sent: {}", response_json);
                        }
                        Err(e) => {
                            let response = JsonRpcResponse::error(
                                None,
                                JsonRpcError::parse_error(format!("Parse error: {}", e)),
                            );
                            let response_json = serde_json::to_string(&response)?;
                            writeln!(writer, "{}", response_json)?;
                            writer.flush()?;
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("Read error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request
    fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(&request.params),
            "notifications/initialized" => {
                // Client notification, acknowledge with empty result
                return JsonRpcResponse::success(request.id, json!({}));
            }
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params),
            "resources/list" => self.handle_resources_list(),
            "resources/read" => self.handle_resources_read(&request.params),
            "ping" => Ok(json!({})),
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(error) => JsonRpcResponse::error(request.id, error),
        }
    }

    /// Handle initialize request
    fn handle_initialize(
        &self,
        _params: &Option<Value>,
    ) -> std::result::Result<Value, JsonRpcError> {
        let capabilities = ServerCapabilities::default();
        let server_info = ServerInfo::default();

        Ok(json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": capabilities,
            "serverInfo": server_info
        }))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self) -> std::result::Result<Value, JsonRpcError> {
        let tools = get_tool_definitions();
        Ok(json!({ "tools": tools }))
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, params: &Option<Value>) -> std::result::Result<Value, JsonRpcError> {
        let params = params
            .as_ref()
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;

        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tool name"))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        let result: ToolResult = handle_tool_call(&self.store, tool_name, &arguments)?;

        serde_json::to_value(result).map_err(|e| JsonRpcError::server_error(e.to_string()))
    }

    /// Handle resources/list request
    fn handle_resources_list(&self) -> std::result::Result<Value, JsonRpcError> {
        let resources: Vec<ResourceDefinition> = self
            .store
            .list_documents()
            .into_iter()
            .map(|doc| ResourceDefinition {
                uri: format!("{}{}", RESOURCE_URI_SCHEME, doc.path),
                description: format!("Documentation file: {}", doc.name),
                name: doc.name,
                mime_type: "text/plain".to_string(),
            })
            .collect();

        Ok(json!({ "resources": resources }))
    }

    /// Handle resources/read request
    fn handle_resources_read(
        &self,
        params: &Option<Value>,
    ) -> std::result::Result<Value, JsonRpcError> {
        let params = params
            .as_ref()
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;

        let uri = params
            .get("uri")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JsonRpcError::invalid_params("Missing resource uri"))?;

        let path = uri.strip_prefix(RESOURCE_URI_SCHEME).ok_or_else(|| {
            JsonRpcError::invalid_params(format!("Invalid URI scheme: {}", uri))
        })?;

        let text = self
            .store
            .read_document(path)
            .map_err(|e| JsonRpcError::server_error(e.to_string()))?;

        let content = ResourceContent {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text,
        };

        Ok(json!({ "contents": [content] }))
    }
}
