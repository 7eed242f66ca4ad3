//! Domain types for the notification core

pub mod email;
pub mod otp;

pub use email::{EmailAddress, EmailMessage, EmailSendResult};
pub use otp::{OneTimeCode, OtpDispatch, OtpNotification, OtpPurpose};
