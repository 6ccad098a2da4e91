use domain::entities::{Catalog, ToolDescriptor};
use domain::ports::detector::{ToolDetector, ToolStatus};
use std::collections::BTreeSet;

/// Detected state of one catalog tool.
#[derive(Debug, Clone)]
pub struct StatusRow<'a> {
    pub category: &'a str,
    pub tool: &'a ToolDescriptor,
    pub status: ToolStatus,
}

/// Probe every catalog tool, grouped by category.
pub fn collect_status<'a, D>(catalog: &'a Catalog, detector: &D) -> Vec<StatusRow<'a>>
where
    D: ToolDetector + ?Sized,
{
    catalog
        .iter()
        .map(|(category, tool)| StatusRow {
            category,
            tool,
            status: detector.detect(tool),
        })
        .collect()
}

/// Ids whose binary is already on `PATH`.
pub fn installed_tools<D>(catalog: &Catalog, detector: &D) -> BTreeSet<String>
where
    D: ToolDetector + ?Sized,
{
    collect_status(catalog, detector)
        .into_iter()
        .filter(|row| row.status.binary_installed)
        .map(|row| row.tool.id.clone())
        .collect()
}
