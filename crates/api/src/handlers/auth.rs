//! Handlers for the `/auth` resource (login, logout, session).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use flowerdesk_core::error::CoreError;
use flowerdesk_core::password::verify_password;
use flowerdesk_core::session::{
    build_removal_cookie, build_set_cookie, SessionContext, SESSION_COOKIES,
};
use flowerdesk_core::types::DbId;
use flowerdesk_db::repositories::FuneralHomeRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::session::FuneralSession;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub funeral_home: FuneralHomeInfo,
}

/// Public funeral home info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct FuneralHomeInfo {
    pub id: DbId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate a funeral home and set the three session cookies.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid login id or password".into(),
        ))
    };

    let home = FuneralHomeRepo::find_by_login_id(&state.pool, input.login_id.trim())
        .await?
        .ok_or_else(invalid)?;

    if !home.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &home.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(login_id = %home.login_id, "Rejected funeral home login");
        return Err(invalid());
    }

    let session = SessionContext {
        funeral_home_id: home.id,
        funeral_home_name: home.name.clone(),
    };
    let opts = state.config.session.cookie_options();
    let cookies = session
        .to_cookie_values(&state.config.session.secret)
        .map(|(name, value)| (SET_COOKIE, build_set_cookie(name, &value, opts)));

    tracing::info!(funeral_home_id = home.id, "Funeral home logged in");

    Ok((
        AppendHeaders(cookies),
        Json(LoginResponse {
            success: true,
            funeral_home: FuneralHomeInfo {
                id: home.id,
                name: home.name,
            },
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clear all three session cookies. Always succeeds, whether or not the
/// caller had a session.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let secure = state.config.session.secure;
    let cookies = SESSION_COOKIES.map(|name| (SET_COOKIE, build_removal_cookie(name, secure)));

    tracing::debug!("Funeral home session cookies cleared");

    (AppendHeaders(cookies), Json(SuccessResponse::OK))
}

/// GET /api/auth/session
///
/// Return the caller's verified session, or 401.
pub async fn current_session(
    FuneralSession(session): FuneralSession,
) -> Json<DataResponse<SessionContext>> {
    Json(DataResponse { data: session })
}
