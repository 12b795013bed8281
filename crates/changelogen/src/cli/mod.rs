//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use changelogen_core::config::{load_config, load_config_or_default};
use changelogen_core::ChangelogConfig;

use commands::{CompletionsCommand, InitCommand, RenderCommand, ValidateCommand};

/// changelogen - Render markdown changelogs from conventional commits
#[derive(Debug, Parser)]
#[command(name = "changelogen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (default: search from the working directory up)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a changelog from commit records
    Render(RenderCommand),

    /// Write a default configuration file
    Init(InitCommand),

    /// Validate the configuration
    Validate(ValidateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Render(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the explicit `--config` file, or search for one from the
    /// working directory and fall back to defaults.
    pub fn load_config(&self) -> anyhow::Result<(ChangelogConfig, Option<PathBuf>)> {
        match &self.config {
            Some(path) => Ok((load_config(path)?, Some(path.clone()))),
            None => {
                let cwd = std::env::current_dir()?;
                Ok(load_config_or_default(&cwd)?)
            }
        }
    }
}
