use std::path::PathBuf;

use flowerdesk_core::session::CookieOptions;

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session cookie signing and attributes.
    pub session: SessionConfig,
    /// Bearer key for `/api/admin/*`. Admin routes are closed when unset.
    pub admin_api_key: Option<String>,
    /// Where completion photos are written and served from.
    pub storage: StorageConfig,
    /// SMS gateway settings. SMS sending is disabled when `None`.
    pub sms: Option<SmsConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_API_KEY`        | unset                      |
    ///
    /// See [`SessionConfig::from_env`], [`StorageConfig::from_env`] and
    /// [`SmsConfig::from_env`] for the remaining variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_api_key = non_empty_var("ADMIN_API_KEY");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
            admin_api_key,
            storage: StorageConfig::from_env(),
            sms: SmsConfig::from_env(),
        }
    }
}

/// Session cookie configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC key used to sign cookie values.
    pub secret: String,
    /// Cookie lifetime in seconds (default: one day).
    pub max_age_secs: i64,
    /// Whether to add the `Secure` attribute.
    pub secure: bool,
}

/// Default session cookie lifetime in seconds.
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24;

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SESSION_SECRET`        | **yes**  | --      |
    /// | `SESSION_MAX_AGE_SECS`  | no       | `86400` |
    /// | `SESSION_COOKIE_SECURE` | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let max_age_secs: i64 = std::env::var("SESSION_MAX_AGE_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_MAX_AGE_SECS.to_string())
            .parse()
            .expect("SESSION_MAX_AGE_SECS must be a valid i64");

        let secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self {
            secret,
            max_age_secs,
            secure,
        }
    }

    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            max_age_secs: self.max_age_secs,
            secure: self.secure,
        }
    }
}

/// Local photo storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory uploads are written to (default: `uploads`).
    pub upload_dir: PathBuf,
    /// URL prefix the directory is served under (default: `/uploads`).
    pub public_base_url: String,
}

impl StorageConfig {
    /// Load from `UPLOAD_DIR` and `PUBLIC_UPLOAD_BASE_URL`.
    pub fn from_env() -> Self {
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());
        let public_base_url =
            std::env::var("PUBLIC_UPLOAD_BASE_URL").unwrap_or_else(|_| "/uploads".into());
        Self {
            upload_dir: PathBuf::from(upload_dir),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// SMS gateway configuration.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Provider send endpoint.
    pub api_url: String,
    /// Provider API key, sent as a bearer token.
    pub api_key: String,
    /// Registered sender number.
    pub sender: String,
}

impl SmsConfig {
    /// Load from `SMS_API_URL`, `SMS_API_KEY` and `SMS_SENDER`.
    ///
    /// Returns `None` unless all three are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let api_url = non_empty_var("SMS_API_URL");
        let api_key = non_empty_var("SMS_API_KEY");
        let sender = non_empty_var("SMS_SENDER");
        match (api_url, api_key, sender) {
            (Some(api_url), Some(api_key), Some(sender)) => Some(Self {
                api_url,
                api_key,
                sender,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "SMS_API_URL, SMS_API_KEY and SMS_SENDER must all be set; SMS disabled"
                );
                None
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
