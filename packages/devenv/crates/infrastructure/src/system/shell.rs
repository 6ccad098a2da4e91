use domain::ports::command::{CommandError, CommandExecutor};
use std::process::Command;
use tracing::debug;

/// Runs command lines through `sh -c`, inheriting stdio so the user sees
/// package manager and script output as it happens.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::with_shell("sh")
    }

    pub fn with_shell(shell: &str) -> Self {
        Self {
            shell: shell.to_string(),
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command_line: &str) -> Result<(), CommandError> {
        debug!(shell = %self.shell, command = command_line, "running command");

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .status()
            .map_err(|source| CommandError::Launch {
                command: command_line.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Exit {
                command: command_line.to_string(),
                status: status.to_string(),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure() {
        let shell = ShellExecutor::new();
        assert!(shell.execute("true").is_ok());

        let err = shell.execute("exit 3").unwrap_err();
        assert!(matches!(err, CommandError::Exit { .. }));
        assert!(err.to_string().contains("exit 3"));
    }

    #[test]
    fn test_missing_shell_is_launch_error() {
        let shell = ShellExecutor::with_shell("/nonexistent/devenv-shell");
        let err = shell.execute("true").unwrap_err();
        assert!(matches!(err, CommandError::Launch { .. }));
    }
}
