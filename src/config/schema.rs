use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "dbms-console.toml";
pub const ENV_PREFIX: &str = "DBMS_CONSOLE";

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub rest: Rest,
    #[serde(default)]
    pub cli: Cli,
}

/// Where the DBMS REST API lives. Every controller resolves its resource paths
/// against this one base URL.
#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct Rest {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for Rest {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:6000".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct Cli {
    pub history_file: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            history_file: ".history".to_string(),
        }
    }
}

pub fn validate_config(config: ConsoleConfig) -> Result<ConsoleConfig, ConfigError> {
    let base_url = Url::parse(&config.rest.base_url).map_err(|e| {
        ConfigError::Message(format!(
            "Invalid REST base URL {:?}: {e}",
            config.rest.base_url
        ))
    })?;

    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(ConfigError::Message(format!(
            "The REST base URL must use http or https, got {:?}",
            base_url.scheme()
        )));
    }

    if config.rest.timeout_secs == Some(0) {
        return Err(ConfigError::Message(
            "rest.timeout_secs must be greater than zero when set".to_string(),
        ));
    }

    Ok(config)
}

fn environment(env_override: Option<HashMap<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .source(env_override)
}

/// Load the config from a TOML file (which may be absent) layered under the
/// `DBMS_CONSOLE__*` environment variables.
pub fn load_config(
    path: &Path,
    env_override: Option<HashMap<String, String>>,
) -> Result<ConsoleConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(environment(env_override));

    config.build()?.try_deserialize().and_then(validate_config)
}

// Load a config from a string (to test our structs are defined correctly)
pub fn load_config_from_string(
    config_str: &str,
    skip_validation: bool,
    env_override: Option<HashMap<String, String>>,
) -> Result<ConsoleConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(config_str, FileFormat::Toml))
        .add_source(environment(env_override));

    if skip_validation {
        config.build()?.try_deserialize()
    } else {
        config.build()?.try_deserialize().and_then(validate_config)
    }
}
