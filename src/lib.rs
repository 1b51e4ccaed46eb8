//! A newsletter subscription service that forwards subscribers to a mailing-list provider,
//! together with the client-side controller of the subscription form.

mod app;
pub mod client;
pub mod config;
mod error;
pub mod provider_client;
pub mod web;

pub use app::{App, AppState};
pub use error::{Error, Result};
pub use provider_client::ProviderClient;
pub use web::serve;

use tracing_subscriber::EnvFilter;

const DBG_LOG_FILTER: &str = "mailpass=debug,tower_http=debug";

/// Compact, human readable logs for development.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DBG_LOG_FILTER)),
        )
        .compact()
        .init();
}

/// JSON logs for production, filtered by `RUST_LOG` (defaults to `info`).
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
