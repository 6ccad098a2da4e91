use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use crate::core::config;
use crate::ui::{self, Icon, Theme};
use devenv::domain::dependency::{validate_catalog, CatalogReport};

#[derive(Parser, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<ExitCode> {
        let (path, catalog) = config::load_catalog(config_path)?;
        let report = validate_catalog(&catalog);

        for line in render(&report) {
            ui::println(line);
        }

        if report.is_clean() {
            ui::println(format!(
                "{} {} tools in {} look consistent",
                Theme::success(Icon::Check),
                catalog.len(),
                path.display()
            ));
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}

fn render(report: &CatalogReport) -> Vec<String> {
    let mut lines = Vec::new();
    for dangling in &report.dangling {
        lines.push(format!(
            "{} {} depends on unknown tool `{}`",
            Theme::warning("!"),
            dangling.tool,
            dangling.missing
        ));
    }
    for cycle in &report.cycles {
        lines.push(format!(
            "{} dependency cycle: {}",
            Theme::error(Icon::Cross),
            cycle.join(" ↔ ")
        ));
    }
    lines
}
