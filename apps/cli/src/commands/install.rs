use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use crate::core::config;
use crate::core::error::CliError;
use crate::ui::{self, prompt, report, Icon, Theme};
use devenv::application::{installed_tools, InstallEvent, InstallationOrchestrator, OrchestratorOptions};
use devenv::domain::dependency::resolve;
use devenv::domain::entities::{Catalog, Selection};
use devenv::domain::system::PlatformDetector;
use devenv::infrastructure::WhichDetector;

#[derive(Parser, Debug)]
pub struct InstallCommand {
    /// Install these tools instead of choosing interactively (repeatable)
    #[arg(long = "tool", short = 't', value_name = "ID")]
    pub tools: Vec<String>,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Do not reinstall tools whose binary is already on PATH
    #[arg(long)]
    pub skip_installed: bool,

    /// Skip tools whose dependencies failed to install
    #[arg(long)]
    pub skip_dependents: bool,
}

impl InstallCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<ExitCode> {
        let (path, catalog) = config::load_catalog(config_path)?;

        cliclack::intro(format!(
            "{} {}",
            console::style("devenv install").bold(),
            console::style(path.display()).dim()
        ))
        .context("failed to write to the terminal")?;
        cliclack::log::info(format!("Detected environment: {}", PlatformDetector::detect()))?;

        let selection = self.selection(&catalog)?;
        if selection.is_empty() {
            cliclack::outro("Nothing selected.")?;
            return Ok(ExitCode::SUCCESS);
        }

        let order = resolve(&selection.flatten(), &catalog);
        if order.is_empty() {
            cliclack::outro("None of the selected tools are in the catalog.")?;
            return Ok(ExitCode::SUCCESS);
        }
        cliclack::log::step(format!("Install order: {}", order.join(" → ")))?;

        if !self.yes && !prompt::confirm(&format!("Install {} tool(s)?", order.len()))? {
            cliclack::outro_cancel("Installation cancelled.")?;
            return Ok(ExitCode::SUCCESS);
        }
        cliclack::outro("Starting installation")?;

        let already_installed = if self.skip_installed {
            installed_tools(&catalog, &WhichDetector::new())
        } else {
            Default::default()
        };
        let present = order.iter().filter(|id| already_installed.contains(*id)).count();
        if present > 0 {
            ui::warn(format!("{present} tool(s) already on PATH will be skipped"));
        }

        let options = OrchestratorOptions {
            skip_dependents_of_failed: self.skip_dependents,
            already_installed,
        };

        let orchestrator = InstallationOrchestrator::system().with_options(options);
        let results = orchestrator.execute_installations_with(&selection, &catalog, |event| match event {
            InstallEvent::Started {
                tool,
                position,
                total,
            } => ui::println(format!(
                "\n{} {} {}",
                Icon::Package,
                Theme::primary(format!("[{}/{}] {}", position + 1, total, tool.label())),
                Theme::muted(format!("via {}", tool.install_method))
            )),
            InstallEvent::Finished { tool, result } => {
                if let Some(reason) = result.skip_reason() {
                    ui::println(format!(
                        "{} {} {}",
                        Theme::warning(Icon::Skip),
                        tool.label(),
                        Theme::muted(format!("skipped: {reason}"))
                    ));
                }
            }
            InstallEvent::Resolved { .. } => {}
        });

        ui::println("");
        for line in report::render(&results) {
            ui::println(line);
        }

        if results.has_failures() {
            ui::error(format!("{} tool(s) failed to install", results.summary().failed));
            return Ok(ExitCode::FAILURE);
        }
        Ok(ExitCode::SUCCESS)
    }

    fn selection(&self, catalog: &Catalog) -> Result<Selection, CliError> {
        if self.tools.is_empty() {
            return prompt::select_tools(catalog);
        }

        if let Some(unknown) = self.tools.iter().find(|id| !catalog.contains(id)) {
            return Err(CliError::UnknownTool(unknown.clone()));
        }

        let mut selection = Selection::new();
        for id in &self.tools {
            let category = catalog.category_of(id).unwrap_or("cli");
            selection.push(category, [id.clone()]);
        }
        Ok(selection)
    }
}
