//! Outbound SMS delivery.
//!
//! [`SmsSender`] is the seam between the `/sms/send` handler and the
//! provider. [`HttpSmsSender`] posts to the configured HTTP gateway and
//! returns its JSON reply unchanged; [`DisabledSmsSender`] is installed when
//! no gateway is configured. There is no retry: a failed send is reported
//! to the caller as-is.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flowerdesk_core::sms::ValidatedSms;

use crate::config::SmsConfig;

/// HTTP request timeout for a single provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for SMS delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// No gateway is configured.
    #[error("SMS sending is not configured")]
    Disabled,

    /// The HTTP request failed (network, DNS, timeout, invalid JSON).
    #[error("SMS provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("SMS provider returned HTTP {status}")]
    HttpStatus { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Something that can deliver a validated message.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send one message and return the provider's JSON response.
    async fn send(&self, sms: &ValidatedSms) -> Result<serde_json::Value, SmsError>;

    /// Whether this sender can actually deliver messages.
    fn is_configured(&self) -> bool;
}

/// Build the sender for the given configuration.
pub fn sender_from_config(config: Option<&SmsConfig>) -> Arc<dyn SmsSender> {
    match config {
        Some(config) => Arc::new(HttpSmsSender::new(config.clone())),
        None => Arc::new(DisabledSmsSender),
    }
}

// ---------------------------------------------------------------------------
// HTTP gateway
// ---------------------------------------------------------------------------

/// Sends messages through an HTTP JSON gateway.
pub struct HttpSmsSender {
    client: reqwest::Client,
    config: SmsConfig,
}

impl HttpSmsSender {
    /// Create a sender with a pre-configured HTTP client.
    pub fn new(config: SmsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }
}

#[async_trait]
impl SmsSender for HttpSmsSender {
    async fn send(&self, sms: &ValidatedSms) -> Result<serde_json::Value, SmsError> {
        let payload = serde_json::json!({
            "sender": self.config.sender,
            "receiver": sms.to,
            "msg": sms.message,
            "msg_type": sms.kind.as_str(),
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SmsError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }

    fn is_configured(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Disabled
// ---------------------------------------------------------------------------

/// Placeholder sender used when the gateway is not configured.
pub struct DisabledSmsSender;

#[async_trait]
impl SmsSender for DisabledSmsSender {
    async fn send(&self, _sms: &ValidatedSms) -> Result<serde_json::Value, SmsError> {
        Err(SmsError::Disabled)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
