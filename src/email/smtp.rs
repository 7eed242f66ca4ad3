//! SMTP email provider implementation using lettre

use super::provider::{EmailProvider, EmailProviderError};
use crate::config::SmtpConfig;
use crate::domain::{EmailMessage, EmailSendResult};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// SMTP-based email provider
pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
    from_name: Option<String>,
}

impl SmtpEmailProvider {
    /// Create a new SMTP provider from configuration
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailProviderError> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        builder = builder.port(config.port);

        // Add credentials if provided
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            let credentials = Credentials::new(username.clone(), password.clone());
            builder = builder.credentials(credentials);
        }

        let transport = builder.build();

        Ok(Self {
            transport,
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn build_from_mailbox(&self) -> Result<Mailbox, EmailProviderError> {
        let mailbox = if let Some(name) = &self.from_name {
            format!("{} <{}>", name, self.from_email)
        } else {
            self.from_email.clone()
        };

        mailbox.parse().map_err(|e| {
            EmailProviderError::InvalidConfiguration(format!("Invalid from address: {}", e))
        })
    }

    fn build_to_mailbox(&self, message: &EmailMessage) -> Result<Mailbox, EmailProviderError> {
        let to = &message.to;
        let mailbox = if let Some(name) = &to.name {
            format!("{} <{}>", name, to.email)
        } else {
            to.email.clone()
        };

        // Recipient addresses are not pre-validated by this service; a
        // malformed address is reported as a send failure here.
        mailbox
            .parse()
            .map_err(|e| EmailProviderError::SendFailed(format!("Invalid to address: {}", e)))
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        let from = self.build_from_mailbox()?;
        let to = self.build_to_mailbox(message)?;

        let email_builder = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject);

        // Build body (multipart if text body is provided)
        let email = if let Some(text_body) = &message.text_body {
            email_builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(text_body.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(message.html_body.clone()),
                        ),
                )
                .map_err(|e| EmailProviderError::SendFailed(e.to_string()))?
        } else {
            email_builder
                .header(ContentType::TEXT_HTML)
                .body(message.html_body.clone())
                .map_err(|e| EmailProviderError::SendFailed(e.to_string()))?
        };

        match self.transport.send(email).await {
            Ok(response) => {
                let message_id = response.message().next().map(|s| s.to_string());
                Ok(EmailSendResult::success(message_id))
            }
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("authentication") || error_msg.contains("AUTH") {
                    Err(EmailProviderError::AuthenticationFailed(error_msg))
                } else if error_msg.contains("connection") || error_msg.contains("timeout") {
                    Err(EmailProviderError::ConnectionError(error_msg))
                } else {
                    Err(EmailProviderError::SendFailed(error_msg))
                }
            }
        }
    }

    async fn verify_connection(&self) -> Result<(), EmailProviderError> {
        self.transport
            .test_connection()
            .await
            .map(|_| ()) // Convert bool to ()
            .map_err(|e| {
                let error_msg = e.to_string();
                if error_msg.contains("authentication") || error_msg.contains("AUTH") {
                    EmailProviderError::AuthenticationFailed(error_msg)
                } else {
                    EmailProviderError::ConnectionError(error_msg)
                }
            })
    }

    fn provider_name(&self) -> &'static str {
        "smtp"
    }
}
