//! Commit input loading

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{InputError, Result};
use crate::types::Commit;

/// Read a JSON array of commits from any reader
pub fn read_commits_json<R: Read>(reader: R) -> Result<Vec<Commit>> {
    let commits: Vec<Commit> = serde_json::from_reader(reader).map_err(InputError::Json)?;
    debug!(commit_count = commits.len(), "commits read");
    Ok(commits)
}

/// Load commits from a JSON or YAML file, chosen by extension
pub fn load_commits(path: &Path) -> Result<Vec<Commit>> {
    info!(path = %path.display(), "loading commits");

    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()).into());
    }

    let extension = path.extension().and_then(|e| e.to_str());
    let commits: Vec<Commit> = match extension {
        Some("json") => {
            let file = std::fs::File::open(path).map_err(InputError::Io)?;
            return read_commits_json(std::io::BufReader::new(file));
        }
        Some("yaml") | Some("yml") => {
            let content = std::fs::read_to_string(path).map_err(InputError::Io)?;
            serde_yaml::from_str(&content).map_err(InputError::Yaml)?
        }
        _ => return Err(InputError::UnsupportedFormat(path.to_path_buf()).into()),
    };

    debug!(commit_count = commits.len(), "commits read");
    Ok(commits)
}
