//! Line-delimited JSON-RPC transport.
//!
//! One request line in, one response line out, strictly in order. The loop
//! ends cleanly at end of input. Responses are flushed one by one so a peer
//! reading line by line never stalls.

use crate::server::dispatcher::Dispatcher;
use crate::server::error::{ServeError, ServeResult};
use bmad_protocol::rpc::{JsonRpcResponse, RpcError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;
use tracing::{error, info};

/// Serve requests from `reader` until end of input, writing responses to
/// `writer`. Returns the number of responses written.
///
/// Every line gets a response, blank ones included: they are not valid JSON
/// and are answered with an internal error and a `null` id. Lines are handled
/// as raw bytes so invalid UTF-8 is answered the same way instead of ending
/// the loop.
///
/// # Errors
///
/// Only I/O failures on the streams themselves end the loop early.
pub async fn serve<R, W>(dispatcher: &Dispatcher, reader: R, mut writer: W) -> ServeResult<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = SplitStream::new(reader.split(b'\n'));
    let mut answered = 0;

    while let Some(line) = lines.next().await {
        let mut line = line.map_err(ServeError::Read)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let response = dispatcher.handle_bytes(&line).await;
        write_response(&mut writer, &response).await?;
        answered += 1;
    }

    Ok(answered)
}

/// Serve on the process's stdin and stdout.
pub async fn serve_stdio(dispatcher: &Dispatcher) -> ServeResult<usize> {
    info!(
        agents = dispatcher.catalog().len(),
        "BMAD MCP server listening on stdio"
    );
    let answered = serve(
        dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    info!(responses = answered, "Input closed, BMAD MCP server stopping");
    Ok(answered)
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> ServeResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes = match serde_json::to_vec(response) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to serialize response: {e}");
            let fallback = JsonRpcResponse::failure(response.id.clone(), RpcError::internal_error());
            serde_json::to_vec(&fallback).unwrap_or_else(|_| {
                br#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error"}}"#
                    .to_vec()
            })
        }
    };
    bytes.push(b'\n');

    writer.write_all(&bytes).await.map_err(ServeError::Write)?;
    writer.flush().await.map_err(ServeError::Write)
}
