//! Email dispatch for MentorMesh Core
//!
//! The mail transport is wrapped behind the [`EmailProvider`] trait so the
//! dispatcher can be exercised with a test double instead of a live SMTP
//! connection.

pub mod provider;
pub mod smtp;
pub mod templates;

pub use provider::{EmailProvider, EmailProviderError};
pub use smtp::SmtpEmailProvider;
pub use templates::{RenderedEmail, TemplateEngine};
