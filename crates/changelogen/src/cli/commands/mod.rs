//! CLI commands

mod completions;
mod init;
mod render;
mod validate;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use render::RenderCommand;
pub use validate::ValidateCommand;
