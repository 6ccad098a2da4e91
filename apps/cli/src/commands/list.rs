use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use crate::core::config;
use crate::ui::{self, tables, Theme};

#[derive(Parser, Debug)]
pub struct ListCommand {}

impl ListCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<ExitCode> {
        let (path, catalog) = config::load_catalog(config_path)?;

        ui::println(Theme::muted(path.display()));
        ui::println(tables::catalog_table(&catalog).to_string());
        Ok(ExitCode::SUCCESS)
    }
}
