use std::sync::Arc;

use crate::config::ServerConfig;
use crate::sms::SmsSender;
use crate::storage::PhotoStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flowerdesk_db::DbPool,
    /// Server configuration (session secret, admin key, storage paths).
    pub config: Arc<ServerConfig>,
    /// Outbound SMS gateway.
    pub sms: Arc<dyn SmsSender>,
    /// Completion photo storage.
    pub storage: Arc<PhotoStorage>,
}
