//! Common test utilities

use async_trait::async_trait;
use mentormesh_core::config::{BrandingConfig, Config, SmtpConfig, TelemetryConfig};
use mentormesh_core::domain::{EmailMessage, EmailSendResult};
use mentormesh_core::email::{EmailProvider, EmailProviderError};
use mentormesh_core::server::{build_router, AppState};
use mentormesh_core::service::OtpService;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Mail transport stub that always succeeds with message id "abc123"
pub struct StubMailer;

#[async_trait]
impl EmailProvider for StubMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        Ok(EmailSendResult::success(Some("abc123".to_string())))
    }

    async fn verify_connection(&self) -> Result<(), EmailProviderError> {
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Mail transport stub that always fails
pub struct FailingMailer;

#[async_trait]
impl EmailProvider for FailingMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        Err(EmailProviderError::ConnectionError(
            "connection refused by relay".to_string(),
        ))
    }

    async fn verify_connection(&self) -> Result<(), EmailProviderError> {
        Err(EmailProviderError::ConnectionError(
            "connection refused by relay".to_string(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

fn test_config() -> Config {
    Config {
        http_host: "127.0.0.1".to_string(),
        http_port: 0,
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 1025,
            username: None,
            password: None,
            use_tls: false,
            from_email: "noreply@mentormesh.io".to_string(),
            from_name: Some("MentorMesh".to_string()),
        },
        branding: BrandingConfig {
            app_name: "MentorMesh".to_string(),
            tagline: "Code. Learn. Grow.".to_string(),
            support_email: "support@mentormesh.io".to_string(),
        },
        telemetry: TelemetryConfig {
            log_format: "text".to_string(),
        },
    }
}

/// A running application instance bound to an ephemeral port
pub struct TestApp {
    address: String,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the app with a mail transport that always succeeds
    pub async fn spawn() -> Self {
        Self::spawn_with_mailer(Arc::new(StubMailer)).await
    }

    /// Spawn the app with a mail transport that always fails
    pub async fn spawn_failing() -> Self {
        Self::spawn_with_mailer(Arc::new(FailingMailer)).await
    }

    pub async fn spawn_with_mailer(mailer: Arc<dyn EmailProvider>) -> Self {
        let config = test_config();
        let otp_service = Arc::new(OtpService::new(mailer, config.branding.clone()));
        let state = AppState {
            config: Arc::new(config),
            otp_service,
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let app = build_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            address: format!("http://{}", addr),
            client: reqwest::Client::new(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.client
    }
}
