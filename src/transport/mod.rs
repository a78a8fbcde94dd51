//! Transport layer: ClickSend wire format (serialization/deserialization).

mod response;
mod send_sms;
mod voice_send;

pub use response::{TransportError, decode_error_message, decode_provider_response};
pub use send_sms::encode_send_sms_body;
pub use voice_send::encode_voice_send_body;
