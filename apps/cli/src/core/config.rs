use super::error::CliError;
use devenv::domain::entities::{Catalog, ConfigParser};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Searched in order when no explicit path is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["./config.yaml", "../config.yaml"];

/// Explicit path wins; otherwise the first default that exists.
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => Err(CliError::Config(format!(
            "config file not found: {}",
            path.display()
        ))),
        None => ConfigParser::find_config(&DEFAULT_CONFIG_PATHS)
            .map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Locate, parse and flatten the tool catalog.
pub fn load_catalog(explicit: Option<&Path>) -> Result<(PathBuf, Catalog), CliError> {
    let path = locate(explicit)?;
    let catalog =
        ConfigParser::load_catalog(&path).map_err(|e| CliError::Config(e.to_string()))?;
    debug!(path = %path.display(), tools = catalog.len(), "loaded catalog");
    Ok((path, catalog))
}
