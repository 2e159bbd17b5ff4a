// crates/narasu/src/logging.rs

//! tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Installs a global fmt subscriber filtered at the configured level.
///
/// `RUST_LOG` takes precedence over the configuration. Returns `false` when a
/// global subscriber was already installed, in which case nothing changes.
pub fn init(config: &LoggingConfig) -> bool {
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.level.directive()));
  tracing_subscriber::registry()
    .with(env_filter)
    .with(tracing_subscriber::fmt::layer().with_target(true).with_level(true))
    .try_init()
    .is_ok()
}
