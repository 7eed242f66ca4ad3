//! Business logic services

pub mod otp;

pub use otp::OtpService;
