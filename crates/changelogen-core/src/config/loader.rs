//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::ChangelogConfig;
use super::validation::validate_config;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// YAML document
    Yaml,
    /// JSON document
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Format name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// Parse configuration text in the given format and validate it
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ChangelogConfig> {
    let config: ChangelogConfig = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(ConfigError::TomlError)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(ConfigError::YamlError)?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(ConfigError::JsonError)?,
    };

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<ChangelogConfig> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    info!(path = %path.display(), format = format.name(), "loading config");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content, format)?;

    debug!(
        path = %path.display(),
        type_count = config.types.len(),
        "config loaded and validated"
    );
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `changelogen.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/changelogen.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration or use defaults.
///
/// Only a missing file falls back to defaults; a config that exists but fails
/// to parse or validate is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<(ChangelogConfig, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((ChangelogConfig::default(), None))
        }
    }
}
