//! Shared helpers for the server integration tests.
//!
//! - Fixtures: a sample agent-definition document and a temporary project
//! - Helpers to drive a [`Dispatcher`] and decode tool payloads

pub mod fixtures;

pub use fixtures::*;

use bmad_core::server::{serve, Dispatcher};
use serde_json::Value;

/// Run `input` through the line transport and decode every response line.
#[allow(dead_code)]
pub async fn run_session(dispatcher: &Dispatcher, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    serve(dispatcher, input.as_bytes(), &mut output)
        .await
        .expect("in-memory session should not fail");

    String::from_utf8(output)
        .expect("responses are UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each response line is JSON"))
        .collect()
}

/// Decode the JSON document carried in a `tools/call` response.
#[allow(dead_code)]
pub fn tool_payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"]
        .as_str()
        .unwrap_or_else(|| panic!("no text content in {response}"));
    serde_json::from_str(text).expect("tool text is JSON")
}

/// A `tools/call` request line.
#[allow(dead_code)]
pub fn call_line(id: i64, tool: &str, arguments: Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": tool, "arguments": arguments }
    })
    .to_string()
}
