//! Diagnostics endpoint.
//!
//! Every check yields a typed [`CheckOutcome`] instead of free-form debug
//! output, so the frontend can render pass/fail per line.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use flowerdesk_core::diagnostics::{CheckOutcome, DiagnosticCheck, DiagnosticReport};

use crate::middleware::session::session_from_headers;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/debug/checks
pub async fn run_checks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<DataResponse<DiagnosticReport>> {
    let database: CheckOutcome = flowerdesk_db::health_check(&state.pool)
        .await
        .map(|()| "Database reachable".to_string())
        .into();

    let session = match session_from_headers(&headers, &state.config.session.secret) {
        Some(ctx) => CheckOutcome::passed(format!(
            "Signed in as {} (#{})",
            ctx.funeral_home_name, ctx.funeral_home_id
        )),
        None => CheckOutcome::failed("No valid funeral home session cookies"),
    };

    let sms = if state.sms.is_configured() {
        CheckOutcome::passed("SMS gateway configured")
    } else {
        CheckOutcome::failed("SMS_API_URL, SMS_API_KEY and SMS_SENDER are not all set")
    };

    let storage: CheckOutcome = state.storage.check_writable().await.into();

    let report = DiagnosticReport::new(vec![
        DiagnosticCheck {
            name: "database",
            outcome: database,
        },
        DiagnosticCheck {
            name: "session",
            outcome: session,
        },
        DiagnosticCheck {
            name: "sms",
            outcome: sms,
        },
        DiagnosticCheck {
            name: "storage",
            outcome: storage,
        },
    ]);

    tracing::debug!(all_passed = report.all_passed, "Diagnostics run");

    Json(DataResponse { data: report })
}
