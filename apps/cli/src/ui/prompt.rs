use crate::core::error::{from_prompt, CliError};
use devenv::domain::entities::{Catalog, Selection};

/// One multiselect per category, in category order.
pub fn select_tools(catalog: &Catalog) -> Result<Selection, CliError> {
    let mut selection = Selection::new();

    for category in catalog.categories() {
        let tools = catalog.tools_in(category);
        if tools.is_empty() {
            continue;
        }

        let mut prompt = cliclack::multiselect(format!("Select {category} tools"))
            .required(false);
        for tool in tools {
            let hint = if tool.dependencies.is_empty() {
                tool.install_method.to_string()
            } else {
                format!("{}, needs {}", tool.install_method, tool.dependencies.join(", "))
            };
            prompt = prompt.item(tool.id.clone(), tool.label(), hint);
        }

        let chosen: Vec<String> = prompt.interact().map_err(from_prompt)?;
        if !chosen.is_empty() {
            selection.push(category, chosen);
        }
    }

    Ok(selection)
}

pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    cliclack::confirm(prompt)
        .initial_value(true)
        .interact()
        .map_err(from_prompt)
}
