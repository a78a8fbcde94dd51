use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::{MessageText, Voice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    SendSms,
    MakeTtsCall,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::SendSms, Tool::MakeTtsCall];

    pub fn name(self) -> &'static str {
        match self {
            Self::SendSms => "send_sms",
            Self::MakeTtsCall => "make_tts_call",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn definition(self) -> ToolDefinition {
        match self {
            Self::SendSms => ToolDefinition {
                name: self.name(),
                description: "Send SMS messages via ClickSend",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "to": {
                            "type": "string",
                            "description": "Phone number in E.164 format (e.g. +61423456789)"
                        },
                        "message": {
                            "type": "string",
                            "description": "Message content to send",
                            "minLength": MessageText::MIN_CHARS,
                            "maxLength": MessageText::MAX_CHARS
                        }
                    },
                    "required": ["to", "message"],
                    "additionalProperties": false
                }),
            },
            Self::MakeTtsCall => ToolDefinition {
                name: self.name(),
                description: "Make Text-to-Speech calls via ClickSend",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "to": {
                            "type": "string",
                            "description": "Phone number in E.164 format"
                        },
                        "message": {
                            "type": "string",
                            "description": "Text content to convert to speech",
                            "minLength": MessageText::MIN_CHARS,
                            "maxLength": MessageText::MAX_CHARS
                        },
                        "voice": {
                            "type": "string",
                            "enum": Voice::ALL.map(Voice::as_str),
                            "default": Voice::default().as_str(),
                            "description": "Voice type for TTS"
                        }
                    },
                    "required": ["to", "message"],
                    "additionalProperties": false
                }),
            },
        }
    }
}

/// Tool metadata as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SendSmsArgs {
    pub(crate) to: String,
    pub(crate) message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TtsCallArgs {
    pub(crate) to: String,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) voice: Option<String>,
}
