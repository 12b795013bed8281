//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use changelogen_core::ChangelogConfig;

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Validate the configuration
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing validate command");

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        // Loading validates the file contents
        let (config, config_path) = match cli.load_config() {
            Ok((config, path)) => (Some(config), path),
            Err(e) => {
                errors.push(format!("Configuration: {:#}", e));
                (None, None)
            }
        };

        if let Some(ref config) = config {
            if config_path.is_none() {
                warnings.push("No configuration file found, using defaults".to_string());
            }
            warnings.extend(config_warnings(config));
        }

        if self.strict {
            errors.append(&mut warnings);
        }

        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "types": config.as_ref().map(|c| c.types.keys().collect::<Vec<_>>()),
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Validation Results"));
                    println!();

                    if let Some(path) = &config_path {
                        println!(
                            "{}",
                            output::key_value(
                                "Config",
                                &output::path_style().apply_to(path.display()).to_string()
                            )
                        );
                    }
                    if let Some(config) = &config {
                        let types: Vec<&str> = config.types.keys().collect();
                        println!("{}", output::key_value("Types", &types.join(", ")));
                        if let Some(repo) = config.github_repo() {
                            println!("{}", output::key_value("GitHub", repo));
                        }
                    }
                    println!();

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}

/// Non-fatal issues in an otherwise valid configuration
fn config_warnings(config: &ChangelogConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.types.is_empty() {
        warnings.push("No commit types configured; only contributors will be rendered".to_string());
    }

    if config.to.trim().is_empty() {
        warnings.push("No target version set; pass --to when rendering".to_string());
    }

    if config.github_repo().is_none() {
        warnings.push("No GitHub repository set; references render without links".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelogen_core::TypeTable;

    #[test]
    fn test_default_config_warnings() {
        let warnings = config_warnings(&ChangelogConfig::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("target version")));
        assert!(warnings.iter().any(|w| w.contains("GitHub")));
    }

    #[test]
    fn test_complete_config_has_no_warnings() {
        let config = ChangelogConfig::default()
            .with_range("v1.0.0", "v1.1.0")
            .with_github("org/repo");
        assert!(config_warnings(&config).is_empty());
    }

    #[test]
    fn test_empty_types_warning() {
        let config = ChangelogConfig::with_types(TypeTable::new())
            .with_range("v1.0.0", "v1.1.0")
            .with_github("org/repo");
        let warnings = config_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("No commit types"));
    }
}
