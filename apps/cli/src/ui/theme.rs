use console::style;
use std::fmt;

/// The central theme definition for the devenv CLI.
/// Defines the official color palette and iconography.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) - headings, tool names.
    pub fn primary(text: impl fmt::Display) -> String {
        style(text).cyan().bold().to_string()
    }

    pub fn bold(text: impl fmt::Display) -> String {
        style(text).bold().to_string()
    }

    /// Success Color (Green)
    pub fn success(text: impl fmt::Display) -> String {
        style(text).green().bold().to_string()
    }

    /// Warning Color (Yellow)
    pub fn warning(text: impl fmt::Display) -> String {
        style(text).yellow().bold().to_string()
    }

    /// Error Color (Red)
    pub fn error(text: impl fmt::Display) -> String {
        style(text).red().bold().to_string()
    }

    /// Muted/Dimmed - ids, hints, paths.
    pub fn muted(text: impl fmt::Display) -> String {
        style(text).dim().to_string()
    }
}

/// Status glyphs.
/// Usage: `println!("{} git", Icon::Check)`
pub enum Icon {
    Check,
    Cross,
    Skip,
    Package,
    Info,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Check => "✓",
            Icon::Cross => "✗",
            Icon::Skip => "↷",
            Icon::Package => "📦",
            Icon::Info => "ℹ",
        };
        write!(f, "{}", icon)
    }
}
