use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Pass --config <PATH> or set DEVENV_CONFIG, and check the file for syntax errors."
                    .to_string(),
            ),
            CliError::UnknownTool(_) => {
                Some("Run 'devenv list' to see the tools defined in your config.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

/// Prompt interruptions surface as `Interrupted`; everything else is real I/O.
pub fn from_prompt(err: std::io::Error) -> CliError {
    if err.kind() == std::io::ErrorKind::Interrupted {
        CliError::Cancelled
    } else {
        CliError::Io(err)
    }
}
