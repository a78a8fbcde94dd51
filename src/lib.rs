//! Model Context Protocol server that sends SMS messages and places text-to-speech
//! calls through the ClickSend REST API.
//!
//! The crate is layered: a domain layer of validated types, a transport layer for
//! ClickSend's wire format, a client layer issuing HTTP requests, a gateway enforcing
//! the rate limit and dispatching tool calls, and a line-delimited JSON-RPC server.
//!
//! ```rust,no_run
//! use clicksend_mcp::{Auth, ClickSendClient, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClickSendClient::new(Auth::new("username", "api-key")?);
//!     let request = SendSms::from_raw("+61423456789", "hello")?;
//!     let response = client.send_sms(&request).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod server;
mod transport;

pub use client::{Auth, ClickSendClient, ClickSendClientBuilder, ClickSendError};
pub use config::{Config, ConfigError};
pub use domain::{
    ApiKey, MessageText, PhoneNumber, ProviderResponse, SendSms, TtsCall, Username,
    ValidationError, Voice, validate_message, validate_phone_number, validate_sms_params,
    validate_tts_params,
};
pub use gateway::{CallToolResult, Content, ErrorCode, GatewayError, RateLimiter, ToolGateway};
pub use server::McpServer;
