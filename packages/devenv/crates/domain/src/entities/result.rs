use super::tool::ToolDescriptor;
use crate::ports::installer::InstallError;
use std::collections::HashMap;
use std::fmt;

/// Why a tool was not handed to a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyInstalled,
    FailedDependency(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyInstalled => write!(f, "already installed"),
            SkipReason::FailedDependency(dep) => write!(f, "dependency `{dep}` did not install"),
        }
    }
}

#[derive(Debug)]
pub enum InstallOutcome {
    Installed,
    Failed(InstallError),
    Skipped(SkipReason),
}

/// Outcome of processing one tool.
#[derive(Debug)]
pub struct InstallationResult {
    pub tool: ToolDescriptor,
    pub outcome: InstallOutcome,
}

impl InstallationResult {
    pub fn from_install(tool: ToolDescriptor, result: Result<(), InstallError>) -> Self {
        let outcome = match result {
            Ok(()) => InstallOutcome::Installed,
            Err(err) => InstallOutcome::Failed(err),
        };
        Self { tool, outcome }
    }

    pub fn skipped(tool: ToolDescriptor, reason: SkipReason) -> Self {
        Self {
            tool,
            outcome: InstallOutcome::Skipped(reason),
        }
    }

    /// True only when a strategy ran and reported success.
    pub fn success(&self) -> bool {
        matches!(self.outcome, InstallOutcome::Installed)
    }

    pub fn error(&self) -> Option<&InstallError> {
        match &self.outcome {
            InstallOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.outcome {
            InstallOutcome::Skipped(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Results of one orchestration run, keyed by tool id.
///
/// Each id is recorded at most once; iteration follows recording order,
/// which is the resolved install order.
#[derive(Debug, Default)]
pub struct InstallReport {
    order: Vec<String>,
    results: HashMap<String, InstallationResult>,
}

impl InstallReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and keeps the earlier result if `id` was already recorded.
    pub fn record(&mut self, id: &str, result: InstallationResult) -> bool {
        if self.results.contains_key(id) {
            return false;
        }
        self.order.push(id.to_string());
        self.results.insert(id.to_string(), result);
        true
    }

    pub fn get(&self, id: &str) -> Option<&InstallationResult> {
        self.results.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.results.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstallationResult)> {
        self.order
            .iter()
            .filter_map(|id| self.results.get(id).map(|r| (id.as_str(), r)))
    }

    pub fn has_failures(&self) -> bool {
        self.results.values().any(|r| r.error().is_some())
    }

    pub fn summary(&self) -> ReportSummary {
        self.results
            .values()
            .fold(ReportSummary::default(), |mut acc, result| {
                acc.total += 1;
                match result.outcome {
                    InstallOutcome::Installed => acc.succeeded += 1,
                    InstallOutcome::Failed(_) => acc.failed += 1,
                    InstallOutcome::Skipped(_) => acc.skipped += 1,
                }
                acc
            })
    }

    pub fn into_results(self) -> HashMap<String, InstallationResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_write_once() {
        let mut report = InstallReport::new();
        let git = ToolDescriptor::new("git", "apt");

        assert!(report.record("git", InstallationResult::from_install(git.clone(), Ok(()))));
        assert!(!report.record(
            "git",
            InstallationResult::from_install(git, Err(InstallError::MissingScriptPath))
        ));

        assert_eq!(report.len(), 1);
        assert!(report.get("git").unwrap().success());
    }

    #[test]
    fn test_summary_and_order() {
        let mut report = InstallReport::new();
        report.record(
            "b",
            InstallationResult::from_install(ToolDescriptor::new("b", "apt"), Ok(())),
        );
        report.record(
            "a",
            InstallationResult::from_install(
                ToolDescriptor::new("a", "bogus"),
                Err(InstallError::UnknownMethod("bogus".into())),
            ),
        );
        report.record(
            "c",
            InstallationResult::skipped(
                ToolDescriptor::new("c", "apt"),
                SkipReason::FailedDependency("a".into()),
            ),
        );

        assert_eq!(report.order(), ["b", "a", "c"]);
        assert_eq!(
            report.summary(),
            ReportSummary {
                total: 3,
                succeeded: 1,
                failed: 1,
                skipped: 1
            }
        );
        assert!(report.has_failures());

        let skipped = report.get("c").unwrap();
        assert!(!skipped.success());
        assert!(skipped.error().is_none());
        assert_eq!(
            skipped.skip_reason().unwrap().to_string(),
            "dependency `a` did not install"
        );
    }
}
