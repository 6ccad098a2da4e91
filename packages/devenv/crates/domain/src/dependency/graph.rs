use super::resolver::DependencySource;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Circular dependency detected: {0}")]
    Cycle(String),
}

/// A tool that names a dependency the catalog does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDependency {
    pub tool: String,
    pub missing: String,
}

/// Findings the lenient resolver would otherwise paper over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    pub dangling: Vec<DanglingDependency>,
    /// Each cycle as the sorted ids of its members.
    pub cycles: Vec<Vec<String>>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cycles.is_empty()
    }
}

/// Whole-catalog dependency graph. Edge B -> A means A depends on B.
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    // Map tool id to NodeIndex for quick lookups
    node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, name: impl Into<String>) -> NodeIndex {
        let name = name.into();
        if let Some(&idx) = self.node_map.get(&name) {
            idx
        } else {
            let idx = self.graph.add_node(name.clone());
            self.node_map.insert(name, idx);
            idx
        }
    }

    pub fn add_dependency(&mut self, from: &str, to: &str) {
        // A depends on B -> B must be installed before A.
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);

        // Avoid duplicate edges
        if self.graph.find_edge(to_idx, from_idx).is_none() {
            self.graph.add_edge(to_idx, from_idx, ());
        }
    }

    /// Strongly connected groups that form a cycle, including self-loops.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || self
                        .graph
                        .find_edge(component[0], component[0])
                        .is_some()
            })
            .map(|component| {
                let mut names: Vec<String> = component
                    .iter()
                    .map(|&idx| self.graph[idx].clone())
                    .collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every declared dependency edge of the catalog.
pub fn validate_catalog<S>(source: &S) -> CatalogReport
where
    S: DependencySource + ?Sized,
{
    let mut ids = source.tool_ids();
    ids.sort_unstable();

    let mut graph = DependencyGraph::new();
    let mut dangling = Vec::new();

    for id in ids {
        graph.add_node(id);
        for dep in source.dependencies_of(id) {
            if source.contains(dep) {
                graph.add_dependency(id, dep);
            } else {
                dangling.push(DanglingDependency {
                    tool: id.to_string(),
                    missing: dep.clone(),
                });
            }
        }
    }

    CatalogReport {
        dangling,
        cycles: graph.cycles(),
    }
}
