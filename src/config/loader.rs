use super::{config_path, ConfigError, PersonaConfig};
use std::path::Path;
use tracing::{debug, warn};

/// Load the configuration from `~/.git-persona/config.toml`.
///
/// Returns `Ok(PersonaConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<PersonaConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory; using defaults");
        return Ok(PersonaConfig::default());
    };
    load_config_from(&path)
}

/// Load the configuration from an explicit path, defaulting when absent.
pub fn load_config_from(path: &Path) -> Result<PersonaConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(PersonaConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: PersonaConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
