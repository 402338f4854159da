//! Integration tests for the typed diagnostics endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_with_cookie, session_cookie};
use sqlx::PgPool;

fn check<'a>(json: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    json["data"]["checks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap_or_else(|| panic!("missing check {name}"))
}

/// Unreachable database, no session and no SMS gateway all show as failed.
#[tokio::test]
async fn test_checks_report_failures() {
    let app = common::build_test_app(common::lazy_pool());

    let response = get(app, "/api/debug/checks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["all_passed"], false);
    assert_eq!(check(&json, "database")["outcome"]["status"], "failed");
    assert_eq!(check(&json, "session")["outcome"]["status"], "failed");
    assert_eq!(check(&json, "sms")["outcome"]["status"], "failed");
    assert!(check(&json, "sms")["outcome"]["error"].is_string());
    assert_eq!(check(&json, "storage")["outcome"]["status"], "passed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checks_with_session_and_database(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = session_cookie(5, "점검장례식장");

    let response = get_with_cookie(app, "/api/debug/checks", &cookie).await;
    let json = body_json(response).await;

    assert_eq!(check(&json, "database")["outcome"]["status"], "passed");
    let session = &check(&json, "session")["outcome"];
    assert_eq!(session["status"], "passed");
    assert_eq!(session["detail"], "Signed in as 점검장례식장 (#5)");
    // SMS is still unconfigured in tests.
    assert_eq!(json["data"]["all_passed"], false);
}
