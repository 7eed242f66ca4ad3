//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::email::{EmailProvider, SmtpEmailProvider};
use crate::service::OtpService;
use crate::state::HasOtpService;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub otp_service: Arc<OtpService>,
}

impl HasOtpService for AppState {
    fn config(&self) -> &Config {
        &self.config
    }

    fn otp_service(&self) -> &OtpService {
        &self.otp_service
    }
}

/// Run the server
pub async fn run(config: Config) -> Result<()> {
    // Create the SMTP transport once; it is shared for the process lifetime.
    let mailer = SmtpEmailProvider::from_config(&config.smtp)
        .map_err(|e| anyhow::anyhow!("Failed to create SMTP transport: {}", e))?;

    // Advisory connectivity check: failure is logged, never fatal, and does
    // not block later send attempts.
    match mailer.verify_connection().await {
        Ok(()) => info!("Mail transport verified, email service is ready"),
        Err(e) => warn!(error = %e, "Mail transport verification failed"),
    }

    let otp_service = Arc::new(OtpService::new(
        Arc::new(mailer),
        config.branding.clone(),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        otp_service,
    };

    let app = build_router(state);

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router with generic state type
///
/// This function is generic over the state type, allowing it to work with
/// both production `AppState` and test implementations that implement
/// `HasOtpService`.
pub fn build_router<S: HasOtpService>(state: S) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health::health))
        .route("/v1/otp/send", post(api::otp::send_otp::<S>))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
