use crate::entities::tool::ToolDescriptor;
use std::path::PathBuf;

/// What is currently on disk for a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolStatus {
    pub binary_installed: bool,
    pub config_applied: bool,
    pub version: Option<String>,
    pub path: Option<PathBuf>,
}

pub trait ToolDetector {
    fn detect(&self, tool: &ToolDescriptor) -> ToolStatus;
}
