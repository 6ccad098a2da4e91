use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tools picked from one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub category: String,
    pub tools: Vec<String>,
}

/// The user's request, in the order categories were presented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub categories: Vec<CategorySelection>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category<I, S>(mut self, category: &str, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(category, tools);
        self
    }

    pub fn push<I, S>(&mut self, category: &str, tools: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.push(CategorySelection {
            category: category.to_string(),
            tools: tools.into_iter().map(Into::into).collect(),
        });
    }

    /// Requested ids with grouping and duplicates dropped.
    pub fn flatten(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .flat_map(|c| c.tools.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.tools.is_empty())
    }
}
