//! One-time code domain types

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// A 6-digit numeric one-time code, value range [100000, 999999].
///
/// Ephemeral: generated per request and discarded after dispatch. Storage
/// and expiry tracking belong to the verification-record store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Number of digits in a code
    pub const LENGTH: usize = 6;

    /// Generate a uniformly distributed 6-digit code.
    pub fn generate() -> Self {
        use rand::Rng;
        let value: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        Self(value.to_string())
    }

    /// Validate a caller-supplied code: exactly 6 ASCII digits in range.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if value.len() != Self::LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::Validation(
                "One-time code must be exactly 6 digits".to_string(),
            ));
        }
        // Range check excludes leading-zero values below 100000
        if value.as_bytes()[0] == b'0' {
            return Err(AppError::Validation(
                "One-time code out of range".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The enumerated reason a code was issued, which determines message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub enum OtpPurpose {
    /// Account verification during signup
    #[default]
    Signup,
    /// Password reset request
    PasswordReset,
    /// Profile-change verification
    ProfileVerification,
}

impl OtpPurpose {
    /// Parse a wire string into a purpose.
    ///
    /// Unrecognized values (including the empty string) fall back to the
    /// signup variant. Callers rely on this permissive default, so it is
    /// preserved rather than rejected.
    pub fn parse(value: &str) -> Self {
        match value {
            "reset" | "password_reset" => Self::PasswordReset,
            "profile_verification" | "profile_update" => Self::ProfileVerification,
            _ => Self::Signup,
        }
    }

    /// Stable wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::PasswordReset => "password_reset",
            Self::ProfileVerification => "profile_verification",
        }
    }

    /// Human-readable label used in user-facing failure messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Signup => "verification",
            Self::PasswordReset => "password reset",
            Self::ProfileVerification => "profile verification",
        }
    }
}

impl Serialize for OtpPurpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OtpPurpose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// A single OTP notification to be composed and dispatched.
///
/// Created per call, consumed by one compose-and-send, then discarded.
#[derive(Debug, Clone)]
pub struct OtpNotification {
    /// Recipient address. Not validated here; a malformed address surfaces
    /// as a dispatch failure from the mail transport.
    pub to: String,
    pub code: OneTimeCode,
    pub recipient_name: Option<String>,
    pub purpose: OtpPurpose,
}

impl OtpNotification {
    pub fn new(to: impl Into<String>, code: OneTimeCode) -> Self {
        Self {
            to: to.into(),
            code,
            recipient_name: None,
            purpose: OtpPurpose::default(),
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.recipient_name = name;
        self
    }

    pub fn with_purpose(mut self, purpose: OtpPurpose) -> Self {
        self.purpose = purpose;
        self
    }
}

/// Successful dispatch outcome
#[derive(Debug, Clone)]
pub struct OtpDispatch {
    /// Opaque, transport-assigned message id
    pub message_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_format_and_range() {
        for _ in 0..10_000 {
            let code = OneTimeCode::generate();
            assert_eq!(code.as_str().len(), 6);
            assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));

            let value: u32 = code.as_str().parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_generate_distribution_roughly_uniform() {
        // Bucket by first digit: each of 1..=9 covers exactly 100000 values,
        // so counts should be near 10000/9 ~ 1111. Bounds are ~8 sigma wide.
        let mut buckets = [0usize; 10];
        for _ in 0..10_000 {
            let code = OneTimeCode::generate();
            let first = (code.as_str().as_bytes()[0] - b'0') as usize;
            buckets[first] += 1;
        }

        assert_eq!(buckets[0], 0);
        for (digit, &count) in buckets.iter().enumerate().skip(1) {
            assert!(
                (850..=1400).contains(&count),
                "first digit {} appeared {} times",
                digit,
                count
            );
        }
    }

    #[test]
    fn test_parse_valid() {
        let code = OneTimeCode::parse("123456").unwrap();
        assert_eq!(code.as_str(), "123456");

        assert!(OneTimeCode::parse("100000").is_ok());
        assert!(OneTimeCode::parse("999999").is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(OneTimeCode::parse("12345").is_err());
        assert!(OneTimeCode::parse("1234567").is_err());
        assert!(OneTimeCode::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(OneTimeCode::parse("12a456").is_err());
        assert!(OneTimeCode::parse("      ").is_err());
        assert!(OneTimeCode::parse("12-456").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(OneTimeCode::parse("012345").is_err());
        assert!(OneTimeCode::parse("099999").is_err());
    }

    #[test]
    fn test_purpose_parse_known_values() {
        assert_eq!(OtpPurpose::parse("reset"), OtpPurpose::PasswordReset);
        assert_eq!(
            OtpPurpose::parse("password_reset"),
            OtpPurpose::PasswordReset
        );
        assert_eq!(
            OtpPurpose::parse("profile_verification"),
            OtpPurpose::ProfileVerification
        );
        assert_eq!(
            OtpPurpose::parse("profile_update"),
            OtpPurpose::ProfileVerification
        );
        assert_eq!(OtpPurpose::parse("signup"), OtpPurpose::Signup);
    }

    #[test]
    fn test_purpose_parse_falls_back_to_signup() {
        assert_eq!(OtpPurpose::parse("banana"), OtpPurpose::Signup);
        assert_eq!(OtpPurpose::parse(""), OtpPurpose::Signup);
        assert_eq!(OtpPurpose::parse("RESET"), OtpPurpose::Signup);
    }

    #[test]
    fn test_purpose_labels() {
        assert_eq!(OtpPurpose::Signup.label(), "verification");
        assert_eq!(OtpPurpose::PasswordReset.label(), "password reset");
        assert_eq!(
            OtpPurpose::ProfileVerification.label(),
            "profile verification"
        );
    }

    #[test]
    fn test_purpose_serde_round_trip() {
        let json = serde_json::to_string(&OtpPurpose::PasswordReset).unwrap();
        assert_eq!(json, "\"password_reset\"");

        let parsed: OtpPurpose = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, OtpPurpose::PasswordReset);
    }

    #[test]
    fn test_purpose_deserialize_unknown_falls_back() {
        let parsed: OtpPurpose = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(parsed, OtpPurpose::Signup);
    }

    #[test]
    fn test_notification_defaults() {
        let notification =
            OtpNotification::new("user@example.com", OneTimeCode::parse("123456").unwrap());

        assert_eq!(notification.to, "user@example.com");
        assert!(notification.recipient_name.is_none());
        assert_eq!(notification.purpose, OtpPurpose::Signup);
    }

    #[test]
    fn test_notification_builder() {
        let notification =
            OtpNotification::new("user@example.com", OneTimeCode::parse("654321").unwrap())
                .with_name(Some("Alice".to_string()))
                .with_purpose(OtpPurpose::ProfileVerification);

        assert_eq!(notification.recipient_name.as_deref(), Some("Alice"));
        assert_eq!(notification.purpose, OtpPurpose::ProfileVerification);
    }
}
