use std::fmt;

use crate::domain::value::{MessageText, PhoneNumber, Voice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    MessageLength { min: usize, max: usize, actual: usize },
    InvalidVoice { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { .. } => write!(
                f,
                "Invalid phone number format. Must be in E.164 format (e.g., +61423456789)"
            ),
            Self::MessageLength { min, max, .. } => {
                write!(f, "Invalid message. Must be between {min} and {max} characters")
            }
            Self::InvalidVoice { .. } => write!(
                f,
                "Invalid voice option. Must be either \"male\" or \"female\""
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Returns `true` if `phone` is `+`, a non-zero digit, then 1 to 14 more digits.
pub fn validate_phone_number(phone: &str) -> bool {
    let Some(digits) = phone.strip_prefix('+') else {
        return false;
    };
    let mut chars = digits.chars();
    match chars.next() {
        Some('1'..='9') => {}
        _ => return false,
    }
    let rest = chars.as_str();
    (PhoneNumber::MIN_DIGITS - 1..=PhoneNumber::MAX_DIGITS - 1).contains(&rest.len())
        && rest.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `body` holds between 1 and 1600 characters.
pub fn validate_message(body: &str) -> bool {
    (MessageText::MIN_CHARS..=MessageText::MAX_CHARS).contains(&body.chars().count())
}

/// Check `send_sms` parameters: phone number first, then message.
pub fn validate_sms_params(to: &str, message: &str) -> Result<(), ValidationError> {
    check_phone(to)?;
    check_message(message)
}

/// Check `make_tts_call` parameters: phone number, message, then the optional voice.
pub fn validate_tts_params(
    to: &str,
    message: &str,
    voice: Option<&str>,
) -> Result<(), ValidationError> {
    check_phone(to)?;
    check_message(message)?;
    if let Some(voice) = voice {
        voice.parse::<Voice>()?;
    }
    Ok(())
}

pub(crate) fn check_phone(phone: &str) -> Result<(), ValidationError> {
    if validate_phone_number(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneNumber {
            input: phone.to_owned(),
        })
    }
}

pub(crate) fn check_message(body: &str) -> Result<(), ValidationError> {
    if validate_message(body) {
        Ok(())
    } else {
        Err(ValidationError::MessageLength {
            min: MessageText::MIN_CHARS,
            max: MessageText::MAX_CHARS,
            actual: body.chars().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "username" };
        assert_eq!(err.to_string(), "username must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid phone number format. Must be in E.164 format (e.g., +61423456789)"
        );

        let err = ValidationError::MessageLength {
            min: 1,
            max: 1600,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid message. Must be between 1 and 1600 characters"
        );

        let err = ValidationError::InvalidVoice {
            input: "robot".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid voice option. Must be either \"male\" or \"female\""
        );
    }

    #[test]
    fn phone_number_accepts_e164() {
        for phone in ["+61423456789", "+12", "+123456789012345", "+4915112345678"] {
            assert!(validate_phone_number(phone), "{phone} should be valid");
        }
    }

    #[test]
    fn phone_number_rejects_everything_else() {
        for phone in [
            "",
            "+",
            "+1",
            "0423456789",
            "61423456789",
            "+0423456789",
            "+61 423 456 789",
            "+61-423456789",
            "+61423456789a",
            "+1234567890123456",
            " +61423456789",
            "+٦١٤٢٣٤٥٦٧٨٩",
        ] {
            assert!(!validate_phone_number(phone), "{phone:?} should be invalid");
        }
    }

    #[test]
    fn message_length_bounds() {
        assert!(!validate_message(""));
        assert!(validate_message("a"));
        assert!(validate_message(&"a".repeat(1600)));
        assert!(!validate_message(&"a".repeat(1601)));
        assert!(validate_message(&"é".repeat(1600)));
        assert!(validate_message("   "));
    }

    #[test]
    fn sms_params_check_phone_then_message() {
        assert!(validate_sms_params("+61423456789", "hello").is_ok());

        let err = validate_sms_params("0423456789", "hello").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));

        let err = validate_sms_params("+61423456789", "").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MessageLength { actual: 0, .. }
        ));

        // Both invalid: the phone number error surfaces first.
        let err = validate_sms_params("bad", "").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));
    }

    #[test]
    fn tts_params_check_voice_last() {
        let err = validate_tts_params("+61423456789", "hi", Some("robot")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidVoice {
                input: "robot".to_owned()
            }
        );

        assert!(validate_tts_params("+61423456789", "hi", Some("male")).is_ok());
        assert!(validate_tts_params("+61423456789", "hi", Some("female")).is_ok());
        assert!(validate_tts_params("+61423456789", "hi", None).is_ok());

        let err = validate_tts_params("+61423456789", "", Some("robot")).unwrap_err();
        assert!(matches!(err, ValidationError::MessageLength { .. }));

        let err = validate_tts_params("nope", "", Some("robot")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));
    }
}
