//! OpenAPI 3.0 documentation assembly
//!
//! Aggregates handler path annotations and domain schemas into a single
//! OpenAPI specification served alongside Swagger UI.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MentorMesh Core API",
        version = "0.1.0",
        description = "MentorMesh Notification Service API - OTP issuance and email dispatch",
        contact(name = "MentorMesh Team")
    ),
    tags(
        (name = "System", description = "Health checks and system status"),
        (name = "Notifications", description = "One-time code issuance and email dispatch"),
    ),
    paths(
        crate::api::health::health,
        crate::api::otp::send_otp,
    ),
    components(schemas(
        crate::api::health::HealthResponse,
        crate::api::otp::SendOtpRequest,
        crate::api::otp::SendOtpResponse,
        crate::domain::OtpPurpose,
    ))
)]
pub struct ApiDoc;
