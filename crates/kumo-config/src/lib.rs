//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, EtradeSettings, JournalSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("KUMO")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Load configuration, falling back to defaults when the file is absent.
pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("KUMO")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
