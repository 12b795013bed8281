//! Render command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use changelogen_core::config::{validate_config, validate_range};
use changelogen_core::{load_commits, read_commits_json, ChangelogConfig, Commit};
use changelogen_markdown::ChangelogGenerator;

use crate::cli::{output, Cli, OutputFormat};

/// Render a changelog from commit records
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Commit records (JSON or YAML file), or `-` to read JSON from stdin
    #[arg(long, value_name = "FILE")]
    pub commits: PathBuf,

    /// Version the range starts at
    #[arg(long, value_name = "VERSION")]
    pub from: Option<String>,

    /// Version the range ends at
    #[arg(long, value_name = "VERSION")]
    pub to: Option<String>,

    /// GitHub repository used for links
    #[arg(long, value_name = "OWNER/REPO", conflicts_with = "no_github")]
    pub github: Option<String>,

    /// Disable links even if the config sets a repository
    #[arg(long)]
    pub no_github: bool,
}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(commits = %self.commits.display(), "executing render command");
        let (config, _) = cli.load_config()?;
        let config = self.apply_overrides(config);
        validate_config(&config)?;
        validate_range(&config)?;

        let commits = self.read_commits()?;
        if commits.is_empty() && !cli.quiet {
            output::warning("No commits to render.");
        }

        let generator = ChangelogGenerator::new();
        match cli.format {
            OutputFormat::Json => {
                let entry = generator.generate(&commits, &config);
                let markdown = generator.format(&entry);
                let output = serde_json::json!({
                    "entry": entry,
                    "markdown": markdown,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("{}", generator.render(&commits, &config));
            }
        }

        Ok(())
    }

    /// Layer command-line values over the loaded configuration
    pub fn apply_overrides(&self, mut config: ChangelogConfig) -> ChangelogConfig {
        if let Some(from) = &self.from {
            config.from = from.clone();
        }
        if let Some(to) = &self.to {
            config.to = to.clone();
        }
        if self.no_github {
            config.github = None;
        } else if let Some(github) = &self.github {
            config.github = Some(github.clone());
        }
        config
    }

    fn read_commits(&self) -> anyhow::Result<Vec<Commit>> {
        if self.commits.as_os_str() == "-" {
            Ok(read_commits_json(std::io::stdin().lock())?)
        } else {
            Ok(load_commits(&self.commits)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> RenderCommand {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            render: RenderCommand,
        }

        let mut argv = vec!["render"];
        argv.extend_from_slice(args);
        Wrapper::try_parse_from(argv).unwrap().render
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let config = ChangelogConfig::default()
            .with_range("v0.1.0", "v0.2.0")
            .with_github("org/old");

        let cmd = command(&[
            "--commits",
            "-",
            "--from",
            "v1.0.0",
            "--to",
            "v1.1.0",
            "--github",
            "org/new",
        ]);
        let config = cmd.apply_overrides(config);

        assert_eq!(config.from, "v1.0.0");
        assert_eq!(config.to, "v1.1.0");
        assert_eq!(config.github_repo(), Some("org/new"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = ChangelogConfig::default()
            .with_range("v0.1.0", "v0.2.0")
            .with_github("org/repo");

        let cmd = command(&["--commits", "commits.json"]);
        assert_eq!(cmd.apply_overrides(config.clone()), config);
    }

    #[test]
    fn test_no_github_clears_repository() {
        let config = ChangelogConfig::default().with_github("org/repo");
        let cmd = command(&["--commits", "commits.json", "--no-github"]);
        assert_eq!(cmd.apply_overrides(config).github, None);
    }

    #[test]
    fn test_github_conflicts_with_no_github() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            render: RenderCommand,
        }

        let result = Wrapper::try_parse_from([
            "render",
            "--commits",
            "-",
            "--github",
            "org/repo",
            "--no-github",
        ]);
        assert!(result.is_err());
    }
}
