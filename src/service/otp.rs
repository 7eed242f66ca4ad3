//! OTP issuance and dispatch service

use crate::config::BrandingConfig;
use crate::domain::{EmailAddress, EmailMessage, OneTimeCode, OtpDispatch, OtpNotification};
use crate::email::{templates, EmailProvider};
use crate::error::{AppError, Result};
use std::sync::Arc;
use tracing::{error, info};

/// Service for issuing one-time codes and dispatching them by email.
///
/// The mail transport is injected behind [`EmailProvider`] so tests can
/// substitute a double for the SMTP client.
pub struct OtpService {
    mailer: Arc<dyn EmailProvider>,
    branding: BrandingConfig,
}

impl OtpService {
    pub fn new(mailer: Arc<dyn EmailProvider>, branding: BrandingConfig) -> Self {
        Self { mailer, branding }
    }

    /// Generate a fresh 6-digit one-time code
    pub fn generate_code(&self) -> OneTimeCode {
        OneTimeCode::generate()
    }

    /// Compose and dispatch one OTP email. Exactly one send attempt; retry
    /// policy, if any, belongs to the caller.
    ///
    /// On transport failure the raw error is logged and the caller receives
    /// a coarse, purpose-labeled [`AppError::EmailDelivery`].
    pub async fn send_otp(&self, notification: &OtpNotification) -> Result<OtpDispatch> {
        let rendered = templates::compose(
            notification.purpose,
            &notification.code,
            notification.recipient_name.as_deref(),
            &self.branding,
        );

        let message = EmailMessage::new(
            EmailAddress::new(&notification.to),
            rendered.subject,
            rendered.html_body,
        )
        .with_text_body(rendered.text_body);

        match self.mailer.send(&message).await {
            Ok(result) => {
                info!(
                    purpose = notification.purpose.as_str(),
                    message_id = result.message_id.as_deref(),
                    "OTP email sent"
                );
                Ok(OtpDispatch {
                    message_id: result.message_id,
                })
            }
            Err(err) => {
                error!(
                    purpose = notification.purpose.as_str(),
                    error = %err,
                    "Failed to dispatch OTP email"
                );
                Err(AppError::EmailDelivery(notification.purpose))
            }
        }
    }
}
