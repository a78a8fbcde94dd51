//! Model Context Protocol server over line-delimited stdio.
//!
//! One JSON-RPC message per line in, one response per line out. Each line is
//! handled to completion before the next is read.

mod protocol;

use std::future::Future;

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::gateway::{ErrorCode, GatewayError, ToolGateway};

pub use protocol::{
    CallToolParams, ErrorObject, InitializeParams, JSONRPC_VERSION, Outcome, PROTOCOL_VERSION,
    Request, Response,
};

pub const SERVER_NAME: &str = "clicksend-mcp";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Why a serve loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    /// The input stream reached EOF.
    Eof,
    /// The shutdown signal fired while waiting for input.
    Shutdown,
}

#[derive(Debug)]
pub struct McpServer {
    gateway: ToolGateway,
}

impl McpServer {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }

    /// Serve stdin/stdout until stdin closes or the process is interrupted.
    ///
    /// On [`Stopped::Shutdown`] a blocking stdin read may still be pending, so the
    /// caller must exit the process rather than wait for the runtime to drop.
    pub async fn run_stdio(&mut self) -> std::io::Result<Stopped> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        info!("ClickSend MCP server running on stdio");

        let stopped = self.serve_until(stdin, stdout, interrupted()).await?;
        match stopped {
            Stopped::Eof => info!("stdin closed, shutting down"),
            Stopped::Shutdown => info!("interrupt received, shutting down"),
        }
        Ok(stopped)
    }

    /// Read requests line by line and write one response line per request.
    ///
    /// Returns when `reader` reaches EOF.
    pub async fn serve<R, W>(&mut self, reader: R, writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.serve_until(reader, writer, std::future::pending())
            .await
            .map(|_| ())
    }

    /// Like [`McpServer::serve`], but also stops once `shutdown` completes.
    ///
    /// `shutdown` is only raced against reading the next line; a request already
    /// being handled runs to completion and its response is written.
    pub async fn serve_until<R, W, F>(
        &mut self,
        reader: R,
        mut writer: W,
        shutdown: F,
    ) -> std::io::Result<Stopped>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut lines = reader.lines();
        loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = &mut shutdown => return Ok(Stopped::Shutdown),
            };
            let Some(line) = line else {
                return Ok(Stopped::Eof);
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
    }

    /// Handle one raw JSON-RPC message. Returns `None` for notifications.
    pub async fn handle_line(&mut self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<Value>(line) {
            Ok(message) => self.handle_message(message).await?,
            Err(err) => {
                warn!(error = %err, "failed to parse JSON-RPC message");
                Response::error(
                    Value::Null,
                    ErrorObject::new(ErrorCode::ParseError, format!("Parse error: {err}")),
                )
            }
        };
        Some(encode(&response))
    }

    async fn handle_message(&mut self, message: Value) -> Option<Response> {
        let fallback_id = message.get("id").cloned().unwrap_or(Value::Null);
        let request = match serde_json::from_value::<Request>(message) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "invalid JSON-RPC request");
                return Some(Response::error(
                    fallback_id,
                    ErrorObject::new(ErrorCode::InvalidRequest, format!("Invalid request: {err}")),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification received");
            return None;
        };

        debug!(method = %request.method, "request received");
        let outcome = self.dispatch(&request.method, request.params).await;
        Some(match outcome {
            Ok(result) => Response::result(id, result),
            Err(error) => Response::error(id, error),
        })
    }

    async fn dispatch(&mut self, method: &str, params: Option<Value>) -> Result<Value, ErrorObject> {
        match method {
            "initialize" => {
                let params: InitializeParams = decode_params(params)?;
                Ok(json!({
                    "protocolVersion": params
                        .protocol_version
                        .as_deref()
                        .unwrap_or(PROTOCOL_VERSION),
                    "capabilities": { "tools": {} },
                    "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
                }))
            }
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.gateway.list_tools() })),
            "tools/call" => {
                let params: CallToolParams = decode_params(params)?;
                let result = self
                    .gateway
                    .call_tool(&params.name, params.arguments)
                    .await
                    .and_then(|result| {
                        serde_json::to_value(result)
                            .map_err(|err| GatewayError::Internal(err.to_string()))
                    });
                result.map_err(|err| ErrorObject::new(err.code(), err.to_string()))
            }
            other => Err(ErrorObject::new(
                ErrorCode::MethodNotFound,
                format!("Method not found: {other}"),
            )),
        }
    }
}

async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a handler the default SIGINT action still ends the process.
        warn!(error = %err, "failed to listen for interrupt");
        std::future::pending::<()>().await;
    }
}

fn decode_params<T>(params: Option<Value>) -> Result<T, ErrorObject>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(params.unwrap_or_else(|| json!({}))).map_err(|err| {
        ErrorObject::new(ErrorCode::InvalidParams, format!("Invalid params: {err}"))
    })
}

fn encode(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|err| {
        warn!(error = %err, "failed to encode JSON-RPC response");
        json!({
            "jsonrpc": JSONRPC_VERSION,
            "id": response.id,
            "error": {
                "code": ErrorCode::InternalError.as_i32(),
                "message": "Internal error",
            },
        })
        .to_string()
    })
}
