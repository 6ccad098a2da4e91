use super::{Icon, Theme};
use devenv::domain::entities::{InstallOutcome, InstallReport};

const STATUS_CMD: &str = "devenv status";
const RETRY_CMD: &str = "devenv install";

/// Per-tool lines in install order, then the summary and next steps.
pub fn render(report: &InstallReport) -> Vec<String> {
    let mut lines = vec![Theme::bold("=== Installation Results ===")];

    for (id, result) in report.iter() {
        let name = format!("{} ({})", result.tool.label(), id);
        let line = match &result.outcome {
            InstallOutcome::Installed => {
                format!("{} {} - installed successfully", Theme::success(Icon::Check), name)
            }
            InstallOutcome::Failed(err) => {
                format!("{} {} - installation failed: {}", Theme::error(Icon::Cross), name, err)
            }
            InstallOutcome::Skipped(reason) => {
                format!("{} {} - skipped: {}", Theme::warning(Icon::Skip), name, reason)
            }
        };
        lines.push(line);
    }

    let summary = report.summary();
    lines.push(String::new());
    lines.push(Theme::bold("=== Summary ==="));
    lines.push(format!("Total attempted: {}", summary.total));
    lines.push(format!("Successful: {}", summary.succeeded));
    lines.push(format!("Failed: {}", summary.failed));
    if summary.skipped > 0 {
        lines.push(format!("Skipped: {}", summary.skipped));
    }

    lines.push(String::new());
    if summary.failed > 0 {
        lines.push("Some installations failed. You can:".to_string());
        lines.push(format!("- Run '{STATUS_CMD}' to check current tool status"));
        lines.push(format!("- Re-run '{RETRY_CMD}' to retry failed installations"));
    } else if summary.succeeded > 0 {
        lines.push("All installations completed successfully!".to_string());
        lines.push(format!(
            "Run '{STATUS_CMD}' to verify your development environment."
        ));
    }

    lines
}
