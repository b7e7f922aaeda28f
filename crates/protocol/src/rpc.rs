//! JSON-RPC 2.0 envelopes exchanged over the line-delimited stdio transport.
//!
//! Every request line produces exactly one response line. The response echoes
//! the request `id` verbatim; an absent id is echoed as `null`.
//!
//! ```json
//! {"jsonrpc":"2.0","id":1,"method":"tools/list"}
//! {"jsonrpc":"2.0","id":1,"result":{"tools":[...]}}
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use ts_rs::TS;

/// Protocol version tag written into every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Error code for an unknown or missing method.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// Error code for malformed input and any failure while building a response.
pub const INTERNAL_ERROR: i32 = -32603;

/// The methods this server understands.
///
/// Anything else lands in [`Method::Unknown`], including a missing or
/// non-string `method` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// `tools/list`
    ToolsList,
    /// `tools/call`
    ToolsCall,
    Unknown(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::ToolsList => "tools/list",
            Method::ToolsCall => "tools/call",
            Method::Unknown(name) => name,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Unknown(String::new())
    }
}

impl From<&str> for Method {
    fn from(name: &str) -> Self {
        match name {
            "tools/list" => Method::ToolsList,
            "tools/call" => Method::ToolsCall,
            other => Method::Unknown(other.to_string()),
        }
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Method::from).unwrap_or_default())
    }
}

/// An incoming request line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct JsonRpcRequest {
    /// Version tag as sent. Never checked; routing looks at `method` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "unknown")]
    pub jsonrpc: Option<Value>,

    /// Correlation id. Any JSON value; `null` when absent.
    #[serde(default)]
    #[ts(type = "unknown")]
    pub id: Value,

    #[serde(default)]
    #[ts(type = "string")]
    pub method: Method,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "unknown")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<Value>, method: impl Into<Method>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: Some(Value::from(JSONRPC_VERSION)),
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// Transport-level error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    pub fn method_not_found() -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: "Method not found".to_string(),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: "Internal error".to_string(),
        }
    }
}

/// An outgoing response line. Exactly one of `result` and `error` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,

    #[ts(type = "unknown")]
    pub id: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "unknown")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
