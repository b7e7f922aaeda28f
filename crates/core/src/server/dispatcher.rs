//! Request dispatch: decode → route → encode for a single request line.

use crate::catalog::{load_catalog_or_empty, AgentCatalog};
use crate::config::ServerConfig;
use crate::knowledge::{FsKnowledgeStore, KnowledgeStore};
use crate::server::error::DispatchError;
use crate::tools::{registry, ToolExecutor};
use bmad_protocol::rpc::{JsonRpcRequest, JsonRpcResponse, Method};
use bmad_protocol::tool_models::{CallToolParams, CallToolResult, ListToolsResult};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Routes JSON-RPC requests to the tool registry and tool executor.
///
/// Every input line yields exactly one [`JsonRpcResponse`]. Transport
/// problems (bad JSON, unknown method) become error envelopes; tool-level
/// problems become successful envelopes whose text payload carries an
/// `error` field.
pub struct Dispatcher {
    tools: ToolExecutor,
}

impl Dispatcher {
    pub fn new(catalog: AgentCatalog, knowledge: Arc<dyn KnowledgeStore>) -> Self {
        Self {
            tools: ToolExecutor::new(catalog, knowledge),
        }
    }

    /// Load the catalog named by `config` and build a dispatcher around it.
    ///
    /// A catalog that cannot be read is logged and replaced by an empty one.
    pub async fn from_config(config: &ServerConfig) -> Self {
        let catalog = load_catalog_or_empty(&config.config_path).await;
        let knowledge = FsKnowledgeStore::new(&config.project_root, &config.knowledge_dir);
        Self::new(catalog, Arc::new(knowledge))
    }

    pub fn catalog(&self) -> &AgentCatalog {
        self.tools.catalog()
    }

    /// Handle one raw request line.
    pub async fn handle_line(&self, line: &str) -> JsonRpcResponse {
        self.handle_bytes(line.as_bytes()).await
    }

    /// Handle one raw request line that may not be valid UTF-8.
    pub async fn handle_bytes(&self, line: &[u8]) -> JsonRpcResponse {
        let request = match decode(line) {
            Ok(request) => request,
            Err((id, e)) => {
                error!("Request handling error: {e}");
                return JsonRpcResponse::failure(id, e.to_rpc_error());
            }
        };
        self.handle_request(request).await
    }

    /// Handle an already decoded request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = request.method.as_str(), id = %request.id, "Handling request");

        match self.route(request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(e) => {
                match e {
                    DispatchError::MethodNotFound(_) => warn!("{e}"),
                    _ => error!("Request handling error: {e}"),
                }
                JsonRpcResponse::failure(request.id, e.to_rpc_error())
            }
        }
    }

    async fn route(&self, method: Method, params: Option<Value>) -> Result<Value, DispatchError> {
        match method {
            Method::ToolsList => Ok(serde_json::to_value(ListToolsResult {
                tools: registry::list(),
            })?),
            Method::ToolsCall => {
                let params = parse_call_params(params)?;
                let payload = self.tools.call(&params.name, &params.arguments).await;
                let text = serde_json::to_string_pretty(&payload)?;
                Ok(serde_json::to_value(CallToolResult::text(text))?)
            }
            Method::Unknown(name) => Err(DispatchError::MethodNotFound(name)),
        }
    }
}

/// Decode a request line. On failure, returns the id to echo (when one
/// could be recovered) with the error.
fn decode(line: &[u8]) -> Result<JsonRpcRequest, (Value, DispatchError)> {
    let value: Value = serde_json::from_slice(line)
        .map_err(|e| (Value::Null, DispatchError::Malformed(e.to_string())))?;

    if !value.is_object() {
        return Err((
            Value::Null,
            DispatchError::Malformed("request is not a JSON object".to_string()),
        ));
    }

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| (id, DispatchError::Malformed(e.to_string())))
}

fn parse_call_params(params: Option<Value>) -> Result<CallToolParams, DispatchError> {
    let params =
        params.ok_or_else(|| DispatchError::InvalidParams("missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| DispatchError::InvalidParams(e.to_string()))
}
