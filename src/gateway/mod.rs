//! Tool gateway: rate limiting, dispatch, validation, and result formatting for the
//! `send_sms` and `make_tts_call` tools.
//!
//! A call goes through these steps, stopping at the first failure:
//!
//! 1. resolve the tool name (unknown names never touch the rate limiter),
//! 2. check the shared cooldown,
//! 3. record the attempt, so a slot is used even if a later step fails,
//! 4. decode and validate the arguments,
//! 5. call ClickSend and wrap its response in a text block.

mod error;
mod rate_limit;
mod tools;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::ClickSendClient;
use crate::domain::{SendSms, TtsCall};

pub use error::{ErrorCode, GatewayError};
pub use rate_limit::{Clock, DEFAULT_COOLDOWN, RateLimited, RateLimiter, SystemClock};
pub use tools::{Tool, ToolDefinition};

use tools::{SendSmsArgs, TtsCallArgs};

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Successful `tools/call` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
}

pub struct ToolGateway {
    client: ClickSendClient,
    limiter: RateLimiter,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ToolGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolGateway")
            .field("client", &self.client)
            .field("limiter", &self.limiter)
            .finish_non_exhaustive()
    }
}

impl ToolGateway {
    /// Gateway with the default 12 second cooldown and the system clock.
    pub fn new(client: ClickSendClient) -> Self {
        Self::with_clock(client, RateLimiter::default(), Arc::new(SystemClock))
    }

    pub fn with_clock(
        client: ClickSendClient,
        limiter: RateLimiter,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            limiter,
            clock,
        }
    }

    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        Tool::ALL.into_iter().map(Tool::definition).collect()
    }

    /// Run one tool call to completion.
    ///
    /// `arguments` of `None` is treated as an empty object.
    pub async fn call_tool(
        &mut self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<CallToolResult, GatewayError> {
        let Some(tool) = Tool::from_name(name) else {
            warn!(tool = name, "unknown tool requested");
            return Err(GatewayError::UnknownTool {
                name: name.to_owned(),
            });
        };

        let now = self.clock.now();
        if let Err(limited) = self.limiter.check(now) {
            warn!(
                tool = tool.name(),
                wait_secs = limited.wait_secs(),
                "tool call rejected by rate limit"
            );
            return Err(GatewayError::RateLimited {
                wait_secs: limited.wait_secs(),
            });
        }
        self.limiter.record(now);

        info!(tool = tool.name(), "dispatching tool call");
        let arguments = arguments.unwrap_or_else(|| Value::Object(Default::default()));
        let result = match tool {
            Tool::SendSms => self.send_sms(arguments).await,
            Tool::MakeTtsCall => self.make_tts_call(arguments).await,
        };

        match &result {
            Ok(_) => info!(tool = tool.name(), "tool call succeeded"),
            Err(err) => warn!(tool = tool.name(), error = %err, "tool call failed"),
        }
        result
    }

    async fn send_sms(&self, arguments: Value) -> Result<CallToolResult, GatewayError> {
        let args: SendSmsArgs = decode_arguments(Tool::SendSms, arguments)?;
        let request = SendSms::from_raw(&args.to, &args.message)?;
        debug!(chars = request.message().as_str().chars().count(), "sending SMS");

        let response = self.client.send_sms(&request).await?;
        Ok(CallToolResult {
            content: vec![Content::text(format!("SMS sent successfully: {response}"))],
        })
    }

    async fn make_tts_call(&self, arguments: Value) -> Result<CallToolResult, GatewayError> {
        let args: TtsCallArgs = decode_arguments(Tool::MakeTtsCall, arguments)?;
        let request = TtsCall::from_raw(&args.to, &args.message, args.voice.as_deref())?;
        debug!(voice = %request.voice(), "placing text-to-speech call");

        let response = self.client.make_tts_call(&request).await?;
        Ok(CallToolResult {
            content: vec![Content::text(format!(
                "TTS call initiated successfully: {response}"
            ))],
        })
    }
}

fn decode_arguments<T: serde::de::DeserializeOwned>(
    tool: Tool,
    arguments: Value,
) -> Result<T, GatewayError> {
    // Structs also deserialize from sequences; only objects carry named arguments.
    let kind = match &arguments {
        Value::Object(_) => None,
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
        Value::Array(_) => Some("an array"),
    };
    if let Some(kind) = kind {
        return Err(GatewayError::InvalidArguments {
            tool: tool.name(),
            source: serde::de::Error::custom(format!(
                "arguments must be a JSON object, got {kind}"
            )),
        });
    }
    serde_json::from_value(arguments).map_err(|source| GatewayError::InvalidArguments {
        tool: tool.name(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use super::Clock;

    /// Clock that only moves when told to.
    #[derive(Debug, Clone)]
    pub(crate) struct ManualClock {
        now: std::sync::Arc<Mutex<Instant>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                now: std::sync::Arc::new(Mutex::new(Instant::now())),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }
}
