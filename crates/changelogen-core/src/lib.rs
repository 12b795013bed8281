//! Changelogen Core - Core library for changelog rendering
//!
//! This crate provides the commit data model, error handling, configuration
//! and input loading shared by the renderer and the command-line tool.

pub mod config;
pub mod error;
pub mod input;
pub mod types;

pub use config::{ChangelogConfig, TypeConfig, TypeTable};
pub use error::{ChangelogenError, ConfigError, InputError, Result};
pub use input::{load_commits, read_commits_json};
pub use types::{Author, Commit, Reference, ReferenceType};
