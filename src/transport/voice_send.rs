use serde::Serialize;

use crate::domain::TtsCall;

#[derive(Debug, Clone, Serialize)]
pub struct VoiceSendBody<'a> {
    messages: [VoiceMessage<'a>; 1],
}

#[derive(Debug, Clone, Serialize)]
struct VoiceMessage<'a> {
    to: &'a str,
    body: &'a str,
    voice: &'static str,
    // ClickSend expects integer flags here, not booleans.
    require_input: u8,
    machine_detection: u8,
}

pub fn encode_voice_send_body(request: &TtsCall) -> VoiceSendBody<'_> {
    VoiceSendBody {
        messages: [VoiceMessage {
            to: request.to().as_str(),
            body: request.message().as_str(),
            voice: request.voice().as_str(),
            require_input: 0,
            machine_detection: 0,
        }],
    }
}
