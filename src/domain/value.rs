use std::fmt;
use std::str::FromStr;

use crate::domain::validation::{ValidationError, check_message, check_phone};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ClickSend account username, sent as the Basic auth user.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Field name used in error messages (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// ClickSend API key, sent as the Basic auth password.
///
/// Invariant: non-empty after trimming. `Debug` never prints the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used in error messages (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number in E.164 notation (`to`).
///
/// Invariant: `+`, a non-zero digit, then 1 to 14 more ASCII digits. No trimming or
/// normalization is applied.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Wire field name used by ClickSend (`to`).
    pub const FIELD: &'static str = "to";

    /// Fewest digits allowed after the `+`.
    pub const MIN_DIGITS: usize = 2;
    /// Most digits allowed after the `+`.
    pub const MAX_DIGITS: usize = 15;

    /// Create a validated phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_phone(&value)?;
        Ok(Self(value))
    }

    /// Borrow the number as sent to ClickSend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`body`) for an SMS or a text-to-speech call.
///
/// Invariant: 1 to 1600 characters. The value is kept as provided, whitespace included.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name used by ClickSend (`body`).
    pub const FIELD: &'static str = "body";

    /// Fewest characters allowed.
    pub const MIN_CHARS: usize = 1;
    /// Most characters allowed; ClickSend's own limit.
    pub const MAX_CHARS: usize = 1600;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_message(&value)?;
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Voice used by ClickSend to read a text-to-speech message.
pub enum Voice {
    #[default]
    Female,
    Male,
}

impl Voice {
    /// Wire field name used by ClickSend (`voice`).
    pub const FIELD: &'static str = "voice";

    /// Every accepted voice, in the order advertised to tool callers.
    pub const ALL: [Voice; 2] = [Voice::Female, Voice::Male];

    /// Wire value (`female` / `male`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl FromStr for Voice {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            other => Err(ValidationError::InvalidVoice {
                input: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
