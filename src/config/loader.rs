// Configuration file loading and creation

use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("penalty-keeper");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();
    load_config_from(&config_path)
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                tracing::warn!(path = %config_path.display(), "invalid config file: {}", e);
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(config_path)?;
        Ok(Config::default())
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    let commented_toml = format!(
        "# Penalty Keeper Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key names: \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\"\n\
         #            or single characters like \"W\", \"Q\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("writing default config to {}", path.display()))?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}
