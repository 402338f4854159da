//! Sends a test message through the running server's SMS route.

use std::time::Duration;

use anyhow::Context;

/// Server used when `--base-url` is not given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Full URL of the send route under `base_url`.
pub fn send_url(base_url: &str) -> String {
    format!("{}/api/sms/send", base_url.trim_end_matches('/'))
}

/// POST `{ to, message }` to the server and return the status and JSON body.
pub async fn send_test_sms(
    base_url: &str,
    to: &str,
    message: &str,
) -> anyhow::Result<(u16, serde_json::Value)> {
    let url = send_url(base_url);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .context("Failed to build HTTP client")?;

    tracing::info!(url = %url, "Sending test SMS");

    let response = client
        .post(&url)
        .json(&serde_json::json!({ "to": to, "message": message }))
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?;

    let status = response.status().as_u16();
    let body = response
        .json::<serde_json::Value>()
        .await
        .context("Server response was not JSON")?;
    Ok((status, body))
}
