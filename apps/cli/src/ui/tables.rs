use devenv::application::StatusRow;
use devenv::domain::entities::Catalog;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

fn mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        "✗"
    }
}

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// One row per tool; `with_paths` adds the resolved binary location.
pub fn status_table(rows: &[StatusRow<'_>], with_paths: bool) -> Table {
    let mut header = vec!["Category", "Tool", "Binary", "Config", "Version"];
    if with_paths {
        header.push("Path");
    }
    let mut table = base_table(header);

    for row in rows {
        let mut cells = vec![
            Cell::new(row.category),
            Cell::new(row.tool.label()),
            Cell::new(mark(row.status.binary_installed)),
            Cell::new(mark(row.status.config_applied)),
            Cell::new(row.status.version.as_deref().unwrap_or("-")),
        ];
        if with_paths {
            let path = row
                .status
                .path
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string());
            cells.push(Cell::new(path));
        }
        table.add_row(cells);
    }
    table
}

pub fn catalog_table(catalog: &Catalog) -> Table {
    let mut table = base_table(vec!["Category", "Id", "Name", "Method", "Depends on"]);
    for (category, tool) in catalog.iter() {
        let deps = if tool.dependencies.is_empty() {
            "-".to_string()
        } else {
            tool.dependencies.join(", ")
        };
        table.add_row(vec![
            Cell::new(category),
            Cell::new(&tool.id),
            Cell::new(tool.label()),
            Cell::new(&tool.install_method),
            Cell::new(deps),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use devenv::domain::entities::ToolDescriptor;
    use devenv::domain::ports::detector::ToolStatus;
    use std::path::PathBuf;

    #[test]
    fn test_status_table_columns() {
        let git = ToolDescriptor::new("git", "apt").with_display_name("Git");
        let rows = vec![StatusRow {
            category: "utilities",
            tool: &git,
            status: ToolStatus {
                binary_installed: true,
                config_applied: false,
                version: Some("2.34.1".into()),
                path: Some(PathBuf::from("/usr/bin/git")),
            },
        }];

        let plain = status_table(&rows, false).to_string();
        assert!(plain.contains("2.34.1"));
        assert!(!plain.contains("/usr/bin/git"));

        let wide = status_table(&rows, true).to_string();
        assert!(wide.contains("/usr/bin/git"));
    }

    #[test]
    fn test_catalog_table_lists_dependencies() {
        let catalog: Catalog = vec![
            ToolDescriptor::new("curl", "apt"),
            ToolDescriptor::new("docker", "script").with_dependencies(["curl"]),
        ]
        .into_iter()
        .collect();

        let rendered = catalog_table(&catalog).to_string();
        assert!(rendered.contains("docker"));
        assert!(rendered.contains("script"));
    }
}
