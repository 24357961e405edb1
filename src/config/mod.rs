mod schema;
mod validation;

pub use schema::ModelConfig;
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/transcript-gate/)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("transcript-gate"))
}

/// Get the default config file path (~/.config/transcript-gate/config.yaml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Return the built-in model configuration.
///
/// `input_dir` is where model artifacts would live; nothing is read from it
/// today, so any path (existing or not) yields the same configuration.
pub fn load_config<P: AsRef<Path>>(input_dir: P) -> ModelConfig {
    tracing::debug!(
        input_dir = %input_dir.as_ref().display(),
        "Using built-in model config"
    );
    ModelConfig::default()
}

/// Load a model configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed or contains unknown fields
pub fn load_config_file(path: &Path) -> Result<ModelConfig> {
    if !path.exists() {
        anyhow::bail!("Config file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: ModelConfig = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}
