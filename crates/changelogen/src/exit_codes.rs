//! Exit codes for the CLI

use changelogen_core::ChangelogenError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Commit input error
pub const INPUT_ERROR: i32 = 3;

/// Validation found problems
pub const VALIDATION_ERROR: i32 = 4;

/// Map a command error to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ChangelogenError>() {
        Some(ChangelogenError::Config(_)) => CONFIG_ERROR,
        Some(ChangelogenError::Input(_)) => INPUT_ERROR,
        _ => ERROR,
    }
}
