use domain::dependency::resolve;
use domain::entities::{
    Catalog, InstallMethod, InstallReport, InstallationResult, Selection, SkipReason,
    ToolDescriptor,
};
use domain::ports::installer::{InstallError, Installer};
use infrastructure::{AptInstaller, ManualInstaller, ScriptInstaller, ShellExecutor};
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::{info, warn};

/// Knobs on top of the plain "install everything in order" behavior.
/// The defaults skip nothing.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorOptions {
    /// Skip a tool when one of its catalog dependencies failed or was skipped
    /// because of a failure.
    pub skip_dependents_of_failed: bool,
    /// Ids reported as already present; they are recorded as skipped.
    pub already_installed: BTreeSet<String>,
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum InstallEvent<'a> {
    Resolved {
        order: &'a [String],
    },
    /// A strategy is about to run; skipped tools only get `Finished`.
    Started {
        tool: &'a ToolDescriptor,
        position: usize,
        total: usize,
    },
    Finished {
        tool: &'a ToolDescriptor,
        result: &'a InstallationResult,
    },
}

/// Wires the resolver and the install strategies together.
pub struct InstallationOrchestrator {
    apt: Box<dyn Installer>,
    script: Box<dyn Installer>,
    manual: Box<dyn Installer>,
    options: OrchestratorOptions,
}

impl InstallationOrchestrator {
    pub fn new(
        apt: impl Installer + 'static,
        script: impl Installer + 'static,
        manual: impl Installer + 'static,
    ) -> Self {
        Self {
            apt: Box::new(apt),
            script: Box::new(script),
            manual: Box::new(manual),
            options: OrchestratorOptions::default(),
        }
    }

    /// Strategies backed by real shell commands and stdout.
    pub fn system() -> Self {
        let shell = Rc::new(ShellExecutor::new());
        Self::new(
            AptInstaller::new(Rc::clone(&shell)),
            ScriptInstaller::new(shell),
            ManualInstaller::new(),
        )
    }

    pub fn with_options(mut self, options: OrchestratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &OrchestratorOptions {
        &self.options
    }

    /// Install the selected tools and their prerequisites, one result per
    /// resolved tool. A failing tool never stops the run.
    pub fn execute_installations(&self, selections: &Selection, catalog: &Catalog) -> InstallReport {
        self.execute_installations_with(selections, catalog, |_| {})
    }

    pub fn execute_installations_with<F>(
        &self,
        selections: &Selection,
        catalog: &Catalog,
        mut on_event: F,
    ) -> InstallReport
    where
        F: FnMut(InstallEvent<'_>),
    {
        let requested = selections.flatten();
        let order = resolve(&requested, catalog);
        info!(
            requested = requested.len(),
            resolved = order.len(),
            "resolved install order"
        );
        on_event(InstallEvent::Resolved { order: &order });

        let mut report = InstallReport::new();
        for (position, id) in order.iter().enumerate() {
            // The resolver only emits catalog members.
            let Some(tool) = catalog.get(id) else {
                warn!(tool = %id, "resolved tool vanished from catalog");
                continue;
            };

            let result = match self.skip_reason(tool, &report, catalog) {
                Some(reason) => {
                    info!(tool = %id, %reason, "skipping");
                    InstallationResult::skipped(tool.clone(), reason)
                }
                None => {
                    on_event(InstallEvent::Started {
                        tool,
                        position,
                        total: order.len(),
                    });
                    self.install_tool(tool)
                }
            };

            on_event(InstallEvent::Finished {
                tool,
                result: &result,
            });
            report.record(id, result);
        }

        report
    }

    /// Route one tool to the strategy matching its install method.
    pub fn install_tool(&self, tool: &ToolDescriptor) -> InstallationResult {
        info!(tool = %tool.id, method = %tool.install_method, "installing");

        let result = match &tool.install_method {
            InstallMethod::Apt => self.apt.install(tool),
            InstallMethod::Script => self.script.install(tool),
            InstallMethod::Manual => self.manual.install(tool),
            InstallMethod::Unknown(tag) => Err(InstallError::UnknownMethod(tag.clone())),
        };

        if let Err(e) = &result {
            warn!(tool = %tool.id, error = %e, "installation failed");
        }

        InstallationResult::from_install(tool.clone(), result)
    }

    fn skip_reason(
        &self,
        tool: &ToolDescriptor,
        report: &InstallReport,
        catalog: &Catalog,
    ) -> Option<SkipReason> {
        if self.options.already_installed.contains(&tool.id) {
            return Some(SkipReason::AlreadyInstalled);
        }

        if !self.options.skip_dependents_of_failed {
            return None;
        }

        let mut deps: Vec<&String> = tool
            .dependencies
            .iter()
            .filter(|dep| catalog.contains(dep))
            .collect();
        deps.sort();

        deps.into_iter()
            .find(|dep| {
                report.get(dep).is_some_and(|r| {
                    r.error().is_some()
                        || matches!(r.skip_reason(), Some(SkipReason::FailedDependency(_)))
                })
            })
            .map(|dep| SkipReason::FailedDependency(dep.clone()))
    }
}
