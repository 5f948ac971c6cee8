use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersionInfoError};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "versioninfo.toml";

/// Represents the complete configuration for version-info.
///
/// Contains the manifest file name, the CI variables holding a build number,
/// the stable release lines and the documentation URL convention.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    #[serde(default = "default_build_number_vars")]
    pub build_number_vars: Vec<String>,

    #[serde(default)]
    pub stable: StableConfig,

    #[serde(default)]
    pub docs: DocsConfig,
}

/// Returns the default manifest file name.
fn default_manifest_file() -> String {
    "package.json".to_string()
}

/// Returns the CI variables consulted for a build number, in priority order.
fn default_build_number_vars() -> Vec<String> {
    vec!["TRAVIS_BUILD_NUMBER".to_string(), "BUILD_NUMBER".to_string()]
}

/// Returns the default stable release lines.
fn default_stable_lines() -> Vec<String> {
    vec!["1.0".to_string(), "1.2".to_string()]
}

fn default_docs_host() -> String {
    "code.angularjs.org".to_string()
}

fn default_legacy_before() -> String {
    "1.0.2".to_string()
}

/// Which `major.minor` lines count as stable releases.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StableConfig {
    #[serde(default = "default_stable_lines")]
    pub lines: Vec<String>,
}

impl Default for StableConfig {
    fn default() -> Self {
        StableConfig {
            lines: default_stable_lines(),
        }
    }
}

/// Documentation URL convention.
///
/// Releases earlier than `legacy_before` used a docs folder suffixed with the version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocsConfig {
    #[serde(default = "default_docs_host")]
    pub host: String,

    #[serde(default = "default_legacy_before")]
    pub legacy_before: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            host: default_docs_host(),
            legacy_before: default_legacy_before(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest_file: default_manifest_file(),
            build_number_vars: default_build_number_vars(),
            stable: StableConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioninfo.toml` in current directory
/// 3. `~/.config/.versioninfo.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| VersionInfoError::config(e.to_string()))
}
