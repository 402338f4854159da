//! Handler for outbound SMS.

use axum::extract::State;
use axum::Json;
use flowerdesk_core::sms::validate_sms_request;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /sms/send`.
#[derive(Debug, Deserialize)]
pub struct SendSmsRequest {
    pub to: String,
    pub message: String,
}

/// POST /api/sms/send
///
/// Validate and send one message. The provider's JSON reply is returned
/// as-is, without the data envelope.
pub async fn send_sms(
    State(state): State<AppState>,
    Json(input): Json<SendSmsRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let sms = validate_sms_request(&input.to, &input.message).map_err(AppError::BadRequest)?;

    let reply = state.sms.send(&sms).await?;

    let to_suffix = &sms.to[sms.to.len().saturating_sub(4)..];
    tracing::info!(
        to_suffix,
        kind = sms.kind.as_str(),
        "SMS sent"
    );

    Ok(Json(reply))
}
