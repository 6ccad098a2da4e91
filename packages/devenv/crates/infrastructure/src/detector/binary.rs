use domain::entities::tool::ToolDescriptor;
use domain::ports::detector::{ToolDetector, ToolStatus};
use domain::system::parse_version;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Looks tools up on `PATH` and asks them for `--version`.
#[derive(Debug, Clone, Default)]
pub struct WhichDetector {
    home: Option<PathBuf>,
}

impl WhichDetector {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// Use `home` for `~` expansion instead of the user's home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    fn expand(&self, path: &str) -> PathBuf {
        match (path.strip_prefix("~/"), &self.home) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(path),
        }
    }

    fn version_of(binary: &Path) -> Option<String> {
        let output = Command::new(binary).arg("--version").output().ok()?;
        if !output.status.success() {
            debug!(binary = %binary.display(), "--version exited unsuccessfully");
            return None;
        }

        // Some tools print their version on stderr
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };
        parse_version(&text).map(|v| v.to_string())
    }
}

impl ToolDetector for WhichDetector {
    fn detect(&self, tool: &ToolDescriptor) -> ToolStatus {
        let path = which::which(tool.binary()).ok();
        let version = path.as_deref().and_then(Self::version_of);
        let config_applied = tool
            .config_path
            .as_deref()
            .is_some_and(|p| self.expand(p).exists());

        ToolStatus {
            binary_installed: path.is_some(),
            config_applied,
            version,
            path,
        }
    }
}
