use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use crate::core::config;
use crate::ui::{self, tables};
use devenv::application::collect_status;
use devenv::infrastructure::WhichDetector;

#[derive(Parser, Debug)]
pub struct StatusCommand {
    /// Include the resolved binary path of each tool
    #[arg(long, short)]
    pub paths: bool,
}

impl StatusCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<ExitCode> {
        let (_, catalog) = config::load_catalog(config_path)?;

        let rows = collect_status(&catalog, &WhichDetector::new());
        ui::println(tables::status_table(&rows, self.paths).to_string());

        let installed = rows.iter().filter(|r| r.status.binary_installed).count();
        ui::info(format!("{installed}/{} tools installed", rows.len()));
        Ok(ExitCode::SUCCESS)
    }
}
