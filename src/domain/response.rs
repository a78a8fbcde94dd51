use std::fmt;

use serde::Serialize;
use serde_json::value::RawValue;

/// Body returned by ClickSend for an accepted request.
///
/// The JSON text is kept exactly as received so it can be handed back to the caller
/// without losing or reordering fields.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ProviderResponse(Box<RawValue>);

impl ProviderResponse {
    pub(crate) fn new(raw: Box<RawValue>) -> Self {
        Self(raw)
    }

    /// Borrow the JSON text as returned by ClickSend.
    pub fn as_json(&self) -> &str {
        self.0.get()
    }

    /// Parse the body into a dynamic JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }
}

impl PartialEq for ProviderResponse {
    fn eq(&self, other: &Self) -> bool {
        self.as_json() == other.as_json()
    }
}

impl Eq for ProviderResponse {}

impl fmt::Display for ProviderResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_json())
    }
}
