use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::Level;

pub const DEFAULT_CONFIG_FILE: &str = "mcversion.toml";
pub const DEFAULT_ENV_PREFIX: &str = "MCVERSION_";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct McVersionConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Reject malformed tokens instead of treating them as empty.
    #[serde(default)]
    pub strict: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for McVersionConfig {
    fn default() -> Self {
        McVersionConfig {
            log_level: default_log_level(),
            strict: false,
        }
    }
}

impl McVersionConfig {
    /// Log level as a `tracing` level. Falls back to WARN for unknown names,
    /// which `load_config` already rejects.
    pub fn max_level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::WARN)
    }
}

fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Load configuration from defaults, `mcversion.toml` (or `path`) and
/// `MCVERSION_*` environment variables, later sources winning.
pub fn load_config(path: Option<&Path>) -> Result<McVersionConfig, figment::Error> {
    load_config_with_env(path, DEFAULT_ENV_PREFIX)
}

pub fn load_config_with_env(
    path: Option<&Path>,
    env_prefix: &str,
) -> Result<McVersionConfig, figment::Error> {
    let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let figment = Figment::from(Serialized::defaults(McVersionConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(env_prefix));

    let config: McVersionConfig = figment.extract()?;

    if parse_level(&config.log_level).is_none() {
        return Err(figment::Error::from(format!(
            "log_level must be one of trace, debug, info, warn, error (got {:?})",
            config.log_level
        )));
    }

    Ok(config)
}
