use super::parser::ConfigError;
use super::tool::ToolDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const DEFAULT_CATEGORY: &str = "tools";

/// On-disk shape of the tool configuration: category -> tool id -> descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub categories: BTreeMap<String, BTreeMap<String, ToolDescriptor>>,
}

/// Read-only lookup from tool id to descriptor, remembering which category
/// declared each tool.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: HashMap<String, ToolDescriptor>,
    categories: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a parsed configuration. A tool id may only be declared once
    /// across all categories.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        for (category, tools) in config.categories {
            for (id, mut tool) in tools {
                tool.id = id;
                catalog.insert(&category, tool)?;
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, category: &str, tool: ToolDescriptor) -> Result<(), ConfigError> {
        if let Some(first) = self.category_of(&tool.id) {
            return Err(ConfigError::DuplicateTool {
                tool: tool.id,
                first: first.to_string(),
                second: category.to_string(),
            });
        }

        let ids = self.categories.entry(category.to_string()).or_default();
        ids.push(tool.id.clone());
        ids.sort();
        self.tools.insert(tool.id.clone(), tool);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Tools of one category, sorted by id.
    pub fn tools_in(&self, category: &str) -> Vec<&ToolDescriptor> {
        self.categories
            .get(category)
            .map(|ids| ids.iter().filter_map(|id| self.tools.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, ids)| ids.iter().any(|known| known == id))
            .map(|(category, _)| category.as_str())
    }

    /// All tools, grouped by category then sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToolDescriptor)> {
        self.categories.iter().flat_map(move |(category, ids)| {
            ids.iter()
                .filter_map(move |id| self.tools.get(id).map(|tool| (category.as_str(), tool)))
        })
    }
}

/// Collect uncategorized tools. Later duplicates replace earlier ones.
impl FromIterator<ToolDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = ToolDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for tool in iter {
            if !catalog.contains(&tool.id) {
                catalog
                    .categories
                    .entry(DEFAULT_CATEGORY.to_string())
                    .or_default()
                    .push(tool.id.clone());
            }
            catalog.tools.insert(tool.id.clone(), tool);
        }
        for ids in catalog.categories.values_mut() {
            ids.sort();
        }
        catalog
    }
}
