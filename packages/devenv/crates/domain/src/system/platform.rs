use serde::{Deserialize, Serialize};
use std::fmt;

/// Host environment the tools are installed into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    Wsl,
    Linux,
    Other(String),
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Wsl => write!(f, "wsl"),
            Environment::Linux => write!(f, "linux"),
            Environment::Other(os) => write!(f, "{}", os),
        }
    }
}

/// Platform detection service
pub struct PlatformDetector;

impl PlatformDetector {
    /// Detect the current environment
    pub fn detect() -> Environment {
        let os = if cfg!(target_os = "linux") {
            "linux".to_string()
        } else {
            os_info::get().os_type().to_string()
        };

        let wsl_distro = std::env::var("WSL_DISTRO_NAME").ok();
        let proc_version = std::fs::read_to_string("/proc/version").ok();

        Self::classify(&os, wsl_distro.as_deref(), proc_version.as_deref())
    }

    /// `WSL_DISTRO_NAME` is set by WSL2; older kernels only show up in `/proc/version`.
    pub fn classify(
        os: &str,
        wsl_distro: Option<&str>,
        proc_version: Option<&str>,
    ) -> Environment {
        if os != "linux" {
            return Environment::Other(os.to_string());
        }

        if wsl_distro.is_some_and(|name| !name.is_empty()) {
            return Environment::Wsl;
        }

        match proc_version.map(str::to_lowercase) {
            Some(version) if version.contains("microsoft") || version.contains("wsl") => {
                Environment::Wsl
            }
            _ => Environment::Linux,
        }
    }
}
