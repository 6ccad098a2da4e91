use domain::entities::tool::ToolDescriptor;
use domain::ports::command::CommandExecutor;
use domain::ports::installer::{InstallError, Installer};
use tracing::info;

const APT_UPDATE_CMD: &str = "sudo apt update";
const APT_INSTALL_CMD: &str = "sudo apt install -y";

/// Package-manager strategy: refresh the index, then install the package.
pub struct AptInstaller<E> {
    executor: E,
}

impl<E: CommandExecutor> AptInstaller<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E: CommandExecutor> Installer for AptInstaller<E> {
    fn install(&self, tool: &ToolDescriptor) -> Result<(), InstallError> {
        // Package name override, otherwise the catalog id
        let package = if tool.package_name.is_empty() {
            tool.id.as_str()
        } else {
            tool.package_name.as_str()
        };

        info!(tool = %tool.id, package, "apt installing");

        self.executor
            .execute(APT_UPDATE_CMD)
            .map_err(|e| InstallError::command("failed to update package list", e))?;

        self.executor
            .execute(&format!("{APT_INSTALL_CMD} {package}"))
            .map_err(|e| InstallError::command(format!("failed to install package {package}"), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingExecutor;

    #[test]
    fn test_update_then_install() {
        let executor = RecordingExecutor::default();
        let apt = AptInstaller::new(&executor);

        let git = ToolDescriptor::new("git", "apt").with_package("git");
        apt.install(&git).unwrap();

        assert_eq!(
            executor.recorded(),
            vec!["sudo apt update", "sudo apt install -y git"]
        );
    }

    #[test]
    fn test_update_failure_stops_install() {
        let executor = RecordingExecutor::failing_on("apt update");
        let apt = AptInstaller::new(&executor);

        let err = apt
            .install(&ToolDescriptor::new("git", "apt").with_package("git"))
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to update package list"));
        assert_eq!(executor.recorded(), vec!["sudo apt update"]);
    }

    #[test]
    fn test_install_failure_names_package() {
        let executor = RecordingExecutor::failing_on("install -y");
        let apt = AptInstaller::new(&executor);

        let err = apt
            .install(&ToolDescriptor::new("fd", "apt").with_package("fd-find"))
            .unwrap_err();

        assert!(matches!(err, InstallError::Command { .. }));
        assert!(err.to_string().starts_with("failed to install package fd-find"));
        assert_eq!(executor.recorded().len(), 2);
    }

    #[test]
    fn test_package_defaults_to_id() {
        let executor = RecordingExecutor::default();
        AptInstaller::new(&executor)
            .install(&ToolDescriptor::new("tmux", "apt"))
            .unwrap();
        assert_eq!(executor.recorded()[1], "sudo apt install -y tmux");
    }
}
