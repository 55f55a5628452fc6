// --- File: crates/dustout_config/src/lib.rs ---
//! Layered configuration loading for the DustOut booking service.
//!
//! Sources, in order of precedence (later wins):
//! 1. `config/default.*` (optional file)
//! 2. `config/{RUN_MODE}.*` (optional file, RUN_MODE defaults to "development")
//! 3. Environment variables prefixed with `DUSTOUT`, `__` as separator
//!    (e.g. `DUSTOUT__SERVER__PORT=5000`).
//!
//! A `.env` file is loaded once before any source is read.

pub mod models;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

pub use models::{AppConfig, EmailConfig, GcalConfig, ServerConfig};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DUSTOUT";

static DOTENV: OnceCell<()> = OnceCell::new();

/// Load `.env` into the process environment exactly once.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        if dotenv::dotenv().is_ok() {
            tracing::debug!("Loaded environment from .env file");
        }
    });
}

/// Loads the application configuration.
///
/// Dependent crates call this so they do not need to know where the
/// configuration actually comes from.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
}
