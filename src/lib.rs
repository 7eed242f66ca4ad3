//! MentorMesh Core - Notification Service Backend
//!
//! This crate provides the notification core for the MentorMesh mentorship
//! marketplace: one-time code issuance and purpose-specific email dispatch
//! through an SMTP mail transport.

pub mod api;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod openapi;
pub mod server;
pub mod service;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
