//! Application state traits for dependency injection
//!
//! Handlers are generic over this trait so the same code works with the
//! production `AppState` and test states carrying a stubbed mail transport.

use crate::config::Config;
use crate::service::OtpService;

/// Trait for application state that provides access to the OTP service.
pub trait HasOtpService: Clone + Send + Sync + 'static {
    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the OTP service
    fn otp_service(&self) -> &OtpService;
}
