use super::command::CommandError;
use crate::entities::tool::ToolDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("unknown install method: {0}")]
    UnknownMethod(String),
    #[error("install script path is required for script installation method")]
    MissingScriptPath,
    /// A strategy's external command failed; `context` names the step.
    #[error("{context}: {source}")]
    Command {
        context: String,
        #[source]
        source: CommandError,
    },
}

impl InstallError {
    pub fn command(context: impl Into<String>, source: CommandError) -> Self {
        InstallError::Command {
            context: context.into(),
            source,
        }
    }
}

/// One installation mechanism.
pub trait Installer {
    fn install(&self, tool: &ToolDescriptor) -> Result<(), InstallError>;
}
