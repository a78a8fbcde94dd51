use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, PhoneNumber, Voice};

/// ClickSend tags every SMS sent by this integration with this `source` value.
pub const SMS_SOURCE: &str = "mcp";

/// One SMS to a single recipient, posted to `/sms/send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    to: PhoneNumber,
    message: MessageText,
}

impl SendSms {
    /// Build from already validated values.
    pub fn new(to: PhoneNumber, message: MessageText) -> Self {
        Self { to, message }
    }

    /// Validate raw caller input (phone number first, then message).
    pub fn from_raw(to: &str, message: &str) -> Result<Self, ValidationError> {
        let to = PhoneNumber::new(to)?;
        let message = MessageText::new(message)?;
        Ok(Self::new(to, message))
    }

    /// Recipient in E.164 form.
    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    /// SMS body.
    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

/// One text-to-speech call to a single recipient, posted to `/voice/send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsCall {
    to: PhoneNumber,
    message: MessageText,
    voice: Voice,
}

impl TtsCall {
    /// Build from already validated values.
    pub fn new(to: PhoneNumber, message: MessageText, voice: Voice) -> Self {
        Self { to, message, voice }
    }

    /// Validate raw caller input (phone number, message, then voice).
    ///
    /// A missing voice resolves to [`Voice::Female`].
    pub fn from_raw(
        to: &str,
        message: &str,
        voice: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let to = PhoneNumber::new(to)?;
        let message = MessageText::new(message)?;
        let voice = voice.map(str::parse::<Voice>).transpose()?.unwrap_or_default();
        Ok(Self::new(to, message, voice))
    }

    /// Recipient in E.164 form.
    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    /// Text read out on the call.
    pub fn message(&self) -> &MessageText {
        &self.message
    }

    /// Voice the message is read in.
    pub fn voice(&self) -> Voice {
        self.voice
    }
}
