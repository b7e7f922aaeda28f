//! Error types for request dispatch and the stdio transport.

use bmad_protocol::rpc::RpcError;
use thiserror::Error;

/// Failures while turning one request into a response.
///
/// Each variant maps to a JSON-RPC error object; none of them stops the
/// request loop.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The line is not a JSON object.
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// `tools/call` without usable `params`.
    #[error("Invalid tools/call params: {0}")]
    InvalidParams(String),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DispatchError {
    /// The error object sent to the client.
    ///
    /// Only an unknown method is reported as such; everything else is a
    /// generic internal error so that internals never leak to the client.
    pub fn to_rpc_error(&self) -> RpcError {
        match self {
            DispatchError::MethodNotFound(_) => RpcError::method_not_found(),
            DispatchError::Malformed(_)
            | DispatchError::InvalidParams(_)
            | DispatchError::Encode(_) => RpcError::internal_error(),
        }
    }
}

/// Failures of the line transport itself. These end the serve loop.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Failed to read request line: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write response line: {0}")]
    Write(#[source] std::io::Error),
}

/// Type alias for Result with ServeError.
pub type ServeResult<T> = Result<T, ServeError>;
