use domain::entities::tool::ToolDescriptor;
use domain::ports::installer::{InstallError, Installer};
use std::cell::RefCell;
use std::io::{self, Write};
use tracing::warn;

const MANUAL_VERIFY_MSG: &str =
    "Please complete the installation manually and run 'devenv status' to verify.";

/// Manual strategy: never runs anything, only tells the user what to do.
pub struct ManualInstaller<W = io::Stdout> {
    out: RefCell<W>,
}

impl ManualInstaller<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ManualInstaller<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ManualInstaller<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Lines shown to the user for `tool`.
    pub fn instructions(tool: &ToolDescriptor) -> Vec<String> {
        let mut lines = vec![format!(
            "Manual installation required for {} ({})",
            tool.label(),
            tool.binary()
        )];

        if tool.notes.is_empty() {
            lines.push(format!(
                "No specific installation instructions provided. Please install {} manually.",
                tool.label()
            ));
        } else {
            lines.push(format!("Installation instructions:\n{}", tool.notes.trim_end()));
        }

        lines.push(MANUAL_VERIFY_MSG.to_string());
        lines
    }
}

impl<W: Write> Installer for ManualInstaller<W> {
    fn install(&self, tool: &ToolDescriptor) -> Result<(), InstallError> {
        let mut out = self.out.borrow_mut();
        let written = Self::instructions(tool)
            .iter()
            .try_for_each(|line| writeln!(out, "{line}"))
            .and_then(|()| out.flush());

        // The instructions are advisory; a closed stdout does not fail the tool.
        if let Err(e) = written {
            warn!(tool = %tool.id, error = %e, "could not print manual instructions");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_notes() {
        let installer = ManualInstaller::with_writer(Vec::<u8>::new());
        let tool = ToolDescriptor::new("vscode", "manual")
            .with_display_name("Visual Studio Code")
            .with_binary("code")
            .with_notes("Install VS Code on Windows and enable the WSL extension.");

        installer.install(&tool).unwrap();

        let output = String::from_utf8(installer.into_inner()).unwrap();
        assert!(output.starts_with("Manual installation required for Visual Studio Code (code)"));
        assert!(output.contains("Installation instructions:\nInstall VS Code on Windows"));
        assert!(output.trim_end().ends_with(MANUAL_VERIFY_MSG));
    }

    #[test]
    fn test_whitespace_notes_are_printed() {
        let tool = ToolDescriptor::new("fonts", "manual").with_notes("  ");
        let lines = ManualInstaller::<Vec<u8>>::instructions(&tool);

        assert_eq!(lines[1], "Installation instructions:\n");
        assert!(!lines.iter().any(|l| l.starts_with("No specific installation instructions")));
    }

    #[test]
    fn test_fallback_without_notes() {
        let installer = ManualInstaller::with_writer(Vec::<u8>::new());
        let tool = ToolDescriptor::new("fonts", "manual").with_display_name("Nerd Fonts");

        assert!(installer.install(&tool).is_ok());

        let output = String::from_utf8(installer.into_inner()).unwrap();
        assert!(output.contains("No specific installation instructions provided. Please install Nerd Fonts manually."));
        assert!(output.contains(MANUAL_VERIFY_MSG));
    }
}
