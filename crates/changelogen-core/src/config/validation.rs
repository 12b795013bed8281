//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::ChangelogConfig;

/// Validate configuration
pub fn validate_config(config: &ChangelogConfig) -> Result<()> {
    debug!("validating configuration");
    validate_github(config)?;
    validate_types(config)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Validate that a version range end is present.
///
/// Not part of [`validate_config`] because the range usually comes from
/// command-line overrides applied after the file is loaded.
pub fn validate_range(config: &ChangelogConfig) -> Result<()> {
    if config.to.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "to".to_string(),
            message: "target version cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_github(config: &ChangelogConfig) -> Result<()> {
    let Some(repo) = config.github_repo() else {
        return Ok(());
    };

    let valid = match repo.split_once('/') {
        Some((owner, name)) => {
            !owner.is_empty()
                && !name.is_empty()
                && !name.contains('/')
                && !repo.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ConfigError::InvalidValue {
            field: "github".to_string(),
            message: format!("expected owner/repo, got '{}'", repo),
        }
        .into());
    }

    Ok(())
}

fn validate_types(config: &ChangelogConfig) -> Result<()> {
    if !config.types.is_empty() {
        debug!(count = config.types.len(), "validating types");
    }
    for (key, type_config) in config.types.iter() {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "types".to_string(),
                message: "type key cannot be empty".to_string(),
            }
            .into());
        }

        if type_config.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("types.{}.title", key),
                message: "title cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
