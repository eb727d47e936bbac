//! Validate configuration command.

use anyhow::Result;
use kumo_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Sandbox mode: {}", config.etrade.sandbox);
            println!("Consumer key variable: {}", config.etrade.consumer_key_env);
            println!(
                "Consumer secret variable: {}",
                config.etrade.consumer_secret_env
            );
            println!("Journal path: {}", config.journal.path);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
