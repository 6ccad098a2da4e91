use domain::entities::tool::ToolDescriptor;
use domain::ports::command::CommandExecutor;
use domain::ports::installer::{InstallError, Installer};
use tracing::info;

const SCRIPT_INSTALL_CMD: &str = "bash";

/// Script strategy: interpret the tool's install script with bash.
pub struct ScriptInstaller<E> {
    executor: E,
}

impl<E: CommandExecutor> ScriptInstaller<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E: CommandExecutor> Installer for ScriptInstaller<E> {
    fn install(&self, tool: &ToolDescriptor) -> Result<(), InstallError> {
        let script = tool.install_script.as_str();
        if script.is_empty() {
            return Err(InstallError::MissingScriptPath);
        }

        info!(tool = %tool.id, script, "running install script");

        self.executor
            .execute(&format!("{SCRIPT_INSTALL_CMD} {script}"))
            .map_err(|e| InstallError::command(format!("failed to execute install script {script}"), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingExecutor;

    #[test]
    fn test_runs_script() {
        let executor = RecordingExecutor::default();
        let docker = ToolDescriptor::new("docker", "script").with_script("install_scripts/docker.sh");

        ScriptInstaller::new(&executor).install(&docker).unwrap();

        assert_eq!(executor.recorded(), vec!["bash install_scripts/docker.sh"]);
    }

    #[test]
    fn test_missing_script_issues_no_command() {
        let executor = RecordingExecutor::default();
        let err = ScriptInstaller::new(&executor)
            .install(&ToolDescriptor::new("docker", "script"))
            .unwrap_err();

        assert!(matches!(err, InstallError::MissingScriptPath));
        assert!(executor.recorded().is_empty());
    }

    #[test]
    fn test_failure_names_script() {
        let executor = RecordingExecutor::failing_on("bash");
        let err = ScriptInstaller::new(&executor)
            .install(&ToolDescriptor::new("nvm", "script").with_script("scripts/nvm.sh"))
            .unwrap_err();

        assert!(err
            .to_string()
            .starts_with("failed to execute install script scripts/nvm.sh"));
    }
}
