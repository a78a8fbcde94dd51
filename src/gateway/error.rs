use serde::Serialize;

use crate::client::ClickSendError;
use crate::domain::ValidationError;

/// JSON-RPC error codes used by the tool-invocation protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i32")]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.as_i32()
    }
}

#[derive(Debug, thiserror::Error)]
/// Every way a tool call can fail once it reaches the gateway.
pub enum GatewayError {
    /// Another action was accepted less than one cooldown ago.
    #[error("Rate limit exceeded. Please wait {wait_secs} seconds.")]
    RateLimited { wait_secs: u64 },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Arguments were missing or had the wrong JSON type.
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ClickSendError),

    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Protocol error code reported to the caller.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::RateLimited { .. } => ErrorCode::InvalidRequest,
            Self::UnknownTool { .. } => ErrorCode::MethodNotFound,
            Self::InvalidArguments { .. } | Self::Validation(_) => ErrorCode::InvalidParams,
            Self::Provider(_) | Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_json_rpc_numbers() {
        assert_eq!(ErrorCode::ParseError.as_i32(), -32700);
        assert_eq!(ErrorCode::InvalidRequest.as_i32(), -32600);
        assert_eq!(ErrorCode::MethodNotFound.as_i32(), -32601);
        assert_eq!(ErrorCode::InvalidParams.as_i32(), -32602);
        assert_eq!(ErrorCode::InternalError.as_i32(), -32603);
        assert_eq!(
            serde_json::to_value(ErrorCode::MethodNotFound).unwrap(),
            serde_json::json!(-32601)
        );
    }

    #[test]
    fn each_kind_maps_to_its_code() {
        let err = GatewayError::RateLimited { wait_secs: 7 };
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.to_string(), "Rate limit exceeded. Please wait 7 seconds.");

        let err = GatewayError::UnknownTool {
            name: "fax".to_owned(),
        };
        assert_eq!(err.code(), ErrorCode::MethodNotFound);
        assert_eq!(err.to_string(), "Unknown tool: fax");

        let err = GatewayError::from(ValidationError::InvalidVoice {
            input: "robot".to_owned(),
        });
        assert_eq!(err.code(), ErrorCode::InvalidParams);
        assert_eq!(
            err.to_string(),
            "Invalid voice option. Must be either \"male\" or \"female\""
        );

        let err = GatewayError::from(ClickSendError::Api {
            status: 400,
            message: "Invalid sender".to_owned(),
            body: None,
        });
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.to_string(), "ClickSend API Error: Invalid sender");

        let err = GatewayError::Internal("boom".to_owned());
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
