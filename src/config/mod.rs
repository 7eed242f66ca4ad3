//! Configuration management for MentorMesh Core

use anyhow::{Context, Result};
use std::env;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// SMTP mail transport configuration
    pub smtp: SmtpConfig,
    /// Product branding used in outgoing email
    pub branding: BrandingConfig,
    /// Telemetry configuration
    pub telemetry: TelemetryConfig,
}

/// SMTP configuration for email sending
#[derive(Debug, Clone, Validate)]
pub struct SmtpConfig {
    /// SMTP server host
    #[validate(length(min = 1, max = 255))]
    pub host: String,

    /// SMTP server port (typically 587 for TLS, 465 for SSL, 25 for unencrypted)
    pub port: u16,

    /// Username for authentication (optional)
    pub username: Option<String>,

    /// Password for authentication (optional)
    pub password: Option<String>,

    /// Use STARTTLS encryption
    pub use_tls: bool,

    /// From email address
    #[validate(email)]
    pub from_email: String,

    /// From name (optional)
    pub from_name: Option<String>,
}

/// Branding fields substituted into outgoing email templates
#[derive(Debug, Clone)]
pub struct BrandingConfig {
    /// Product name shown in headings and disclaimers
    pub app_name: String,
    /// Product tagline shown under the email header
    pub tagline: String,
    /// Support contact shown in the email footer
    pub support_email: String,
}

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Log output format: "text" or "json"
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let smtp = SmtpConfig {
            host: env::var("SMTP_HOST").context("SMTP_HOST is required")?,
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .context("Invalid SMTP_PORT")?,
            username: env::var("SMTP_USERNAME").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
            use_tls: env::var("SMTP_USE_TLS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            from_email: env::var("EMAIL_FROM").context("EMAIL_FROM is required")?,
            from_name: env::var("EMAIL_FROM_NAME").ok(),
        };
        smtp.validate().context("Invalid SMTP configuration")?;

        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            smtp,
            branding: BrandingConfig {
                app_name: env::var("APP_NAME").unwrap_or_else(|_| "MentorMesh".to_string()),
                tagline: env::var("APP_TAGLINE")
                    .unwrap_or_else(|_| "Code. Learn. Grow.".to_string()),
                support_email: env::var("SUPPORT_EMAIL")
                    .unwrap_or_else(|_| "support@mentormesh.io".to_string()),
            },
            telemetry: TelemetryConfig {
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            },
        })
    }

    /// HTTP bind address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
