//! Operator utilities that ship next to the API server.

pub mod hash;
pub mod icons;
pub mod sms_client;

use tracing_subscriber::EnvFilter;

/// Initialise `tracing` for a CLI binary. Logs go to stderr so stdout stays
/// clean for the tool's own output. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "flowerdesk_tools=info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
