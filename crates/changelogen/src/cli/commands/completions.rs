//! Completions command

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use tracing::info;

use crate::cli::{output, Cli};

const BIN_NAME: &str = "changelogen";

/// Print or install a shell completion script
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Replace an existing file at --output
    #[arg(short, long, requires = "output")]
    pub force: bool,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, output = ?self.output, "executing completions command");

        match &self.output {
            Some(path) => {
                write_script_file(self.shell, path, self.force)?;
                if !cli.quiet {
                    output::success(&format!(
                        "{} completions written to {}",
                        self.shell,
                        output::path_style().apply_to(path.display())
                    ));
                }
            }
            None => write_script(self.shell, &mut std::io::stdout().lock()),
        }

        Ok(())
    }
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// Render the script fully before touching the file, so a refused
/// overwrite leaves it intact.
fn write_script_file(shell: Shell, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut script = Vec::new();
    write_script(shell, &mut script);
    std::fs::write(path, script)?;
    Ok(())
}
