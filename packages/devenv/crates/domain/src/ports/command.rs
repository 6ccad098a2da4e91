use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed with {status}")]
    Exit { command: String, status: String },
}

/// Runs a shell command line to completion.
///
/// Output handling belongs to the implementation; callers only learn whether
/// the command succeeded.
pub trait CommandExecutor {
    fn execute(&self, command_line: &str) -> Result<(), CommandError>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn execute(&self, command_line: &str) -> Result<(), CommandError> {
        (**self).execute(command_line)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Box<E> {
    fn execute(&self, command_line: &str) -> Result<(), CommandError> {
        (**self).execute(command_line)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Rc<E> {
    fn execute(&self, command_line: &str) -> Result<(), CommandError> {
        (**self).execute(command_line)
    }
}
