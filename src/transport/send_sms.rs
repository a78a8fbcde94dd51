use serde::Serialize;

use crate::domain::{SMS_SOURCE, SendSms};

#[derive(Debug, Clone, Serialize)]
pub struct SendSmsBody<'a> {
    messages: [SmsMessage<'a>; 1],
}

#[derive(Debug, Clone, Serialize)]
struct SmsMessage<'a> {
    source: &'static str,
    body: &'a str,
    to: &'a str,
}

pub fn encode_send_sms_body(request: &SendSms) -> SendSmsBody<'_> {
    SendSmsBody {
        messages: [SmsMessage {
            source: SMS_SOURCE,
            body: request.message().as_str(),
            to: request.to().as_str(),
        }],
    }
}
