//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SMS_SOURCE, SendSms, TtsCall};
pub use response::ProviderResponse;
pub use validation::{
    ValidationError, validate_message, validate_phone_number, validate_sms_params,
    validate_tts_params,
};
pub use value::{ApiKey, MessageText, PhoneNumber, Username, Voice};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
        assert_eq!(Username::new(" acme ").unwrap().as_str(), "acme");
    }

    #[test]
    fn api_key_rejects_empty_and_hides_debug() {
        assert!(matches!(
            ApiKey::new(""),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
        let key = ApiKey::new("secret-key").unwrap();
        assert!(!format!("{key:?}").contains("secret-key"));
    }

    #[test]
    fn phone_number_is_not_trimmed() {
        assert!(PhoneNumber::new("+61423456789").is_ok());
        assert!(PhoneNumber::new("+61423456789 ").is_err());
    }

    #[test]
    fn message_text_length_is_enforced() {
        assert!(MessageText::new("").is_err());
        assert!(MessageText::new("x".repeat(MessageText::MAX_CHARS)).is_ok());
        assert!(MessageText::new("x".repeat(MessageText::MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn voice_parses_closed_set() {
        assert_eq!("female".parse::<Voice>().unwrap(), Voice::Female);
        assert_eq!("male".parse::<Voice>().unwrap(), Voice::Male);
        assert!("Male".parse::<Voice>().is_err());
        assert_eq!(Voice::default(), Voice::Female);
    }

    #[test]
    fn send_sms_from_raw_reports_phone_before_message() {
        let err = SendSms::from_raw("12345", "").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));

        let sms = SendSms::from_raw("+61423456789", "hello").unwrap();
        assert_eq!(sms.to().as_str(), "+61423456789");
        assert_eq!(sms.message().as_str(), "hello");
    }

    #[test]
    fn tts_call_from_raw_defaults_voice() {
        let call = TtsCall::from_raw("+61423456789", "hi", None).unwrap();
        assert_eq!(call.voice(), Voice::Female);

        let call = TtsCall::from_raw("+61423456789", "hi", Some("male")).unwrap();
        assert_eq!(call.voice(), Voice::Male);

        let err = TtsCall::from_raw("+61423456789", "hi", Some("robot")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVoice { .. }));
    }
}
