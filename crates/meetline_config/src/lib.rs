// --- File: crates/meetline_config/src/lib.rs ---
//! Unified configuration for the Meetline application.
//!
//! Configuration is layered: `config/default.toml`, then an optional
//! environment-specific file selected by `RUN_ENV`, then `APP`-prefixed
//! environment variables with `__` as the nesting separator
//! (e.g. `APP__SERVER__PORT=9000`). A `.env` file is loaded once before
//! any of this happens.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

pub mod models;
pub use models::*;

static DOTENV: OnceCell<()> = OnceCell::new();

/// Load `.env` into the process environment exactly once.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        // Missing .env is fine; environments like CI set real variables.
        let _ = dotenv::dotenv();
    });
}

/// Loads the layered application configuration.
///
/// Dependent crates call this so they do not need to know where the
/// configuration comes from.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());
    debug!("Loading configuration for RUN_ENV={}", run_env);

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    config.try_deserialize()
}
