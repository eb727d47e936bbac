//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub etrade: EtradeSettings,
    #[serde(default)]
    pub journal: JournalSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "kumo".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// E*TRADE API configuration.
///
/// Only the names of the environment variables holding the consumer
/// pair live in the file; the secrets themselves never do.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EtradeSettings {
    pub consumer_key_env: String,
    pub consumer_secret_env: String,
    pub sandbox: bool,
}

impl Default for EtradeSettings {
    fn default() -> Self {
        Self {
            consumer_key_env: "CONSUMER_SANDBOX_KEY".to_string(),
            consumer_secret_env: "CONSUMER_SANDBOX_SECRET".to_string(),
            sandbox: true,
        }
    }
}

/// Trade journal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalSettings {
    pub path: String,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            path: "trade_log.csv".to_string(),
        }
    }
}
