//! OTP dispatch API handlers

use crate::domain::{OneTimeCode, OtpNotification, OtpPurpose};
use crate::error::AppError;
use crate::state::HasOtpService;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for dispatching an OTP email
#[derive(Debug, Deserialize, ToSchema)]
pub struct SendOtpRequest {
    /// Recipient address. Format is not validated here; a bad address
    /// surfaces as a dispatch failure.
    pub email: String,
    /// Optional caller-supplied code. Generated server-side when absent.
    pub code: Option<String>,
    /// Recipient display name, greeting defaults to "User" when absent
    pub name: Option<String>,
    /// Purpose of the email; unrecognized values fall back to signup
    #[serde(default)]
    pub purpose: OtpPurpose,
}

/// Response body for a dispatched OTP email
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendOtpResponse {
    pub success: bool,
    /// Opaque, transport-assigned message id
    pub message_id: Option<String>,
    /// The dispatched code, echoed so the calling flow can register it
    /// with its verification-record store
    pub code: String,
}

/// Compose and send an OTP email
#[utoipa::path(
    post,
    path = "/v1/otp/send",
    tag = "Notifications",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "Email dispatched", body = SendOtpResponse),
        (status = 422, description = "Supplied code is not a valid one-time code"),
        (status = 502, description = "Mail transport failure")
    )
)]
pub async fn send_otp<S: HasOtpService>(
    State(state): State<S>,
    Json(input): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, AppError> {
    let code = match input.code.as_deref() {
        Some(raw) => OneTimeCode::parse(raw)?,
        None => OneTimeCode::generate(),
    };

    let notification = OtpNotification::new(input.email, code)
        .with_name(input.name)
        .with_purpose(input.purpose);

    let dispatch = state.otp_service().send_otp(&notification).await?;

    Ok(Json(SendOtpResponse {
        success: true,
        message_id: dispatch.message_id,
        code: notification.code.to_string(),
    }))
}
