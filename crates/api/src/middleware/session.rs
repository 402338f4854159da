//! Cookie-based funeral-home session extractor.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use flowerdesk_core::error::CoreError;
use flowerdesk_core::session::{parse_cookie_header, SessionContext};

use crate::error::AppError;
use crate::state::AppState;

/// The verified session of the funeral home making the request.
///
/// Use this as an extractor parameter in any handler scoped to a funeral
/// home:
///
/// ```ignore
/// async fn my_handler(FuneralSession(session): FuneralSession) -> AppResult<Json<()>> {
///     tracing::info!(funeral_home_id = session.funeral_home_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FuneralSession(pub SessionContext);

impl FromRequestParts<AppState> for FuneralSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_from_headers(&parts.headers, &state.config.session.secret)
            .map(FuneralSession)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Funeral home login required".into(),
                ))
            })
    }
}

/// Read every `Cookie` header and build a session context if the full,
/// correctly signed cookie set is present.
pub fn session_from_headers(headers: &HeaderMap, secret: &str) -> Option<SessionContext> {
    let cookies = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(parse_cookie_header);
    SessionContext::from_cookies(cookies, secret)
}
