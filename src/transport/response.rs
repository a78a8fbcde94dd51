use serde::Deserialize;
use serde_json::value::RawValue;

use crate::domain::ProviderResponse;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorJsonBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    response_msg: Option<serde_json::Value>,
}

/// Decode a successful body, keeping the JSON text as received.
pub fn decode_provider_response(json: &str) -> Result<ProviderResponse, TransportError> {
    let raw: Box<RawValue> = serde_json::from_str(json.trim())?;
    Ok(ProviderResponse::new(raw))
}

/// Pull ClickSend's own error description out of a rejected request's body.
///
/// `message` wins over `response_msg`; empty or non-string values are ignored.
pub fn decode_error_message(body: &str) -> Option<String> {
    let parsed: ErrorJsonBody = serde_json::from_str(body).ok()?;
    [parsed.message, parsed.response_msg]
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        })
}
