pub mod graph;
pub mod resolver;

pub use graph::{validate_catalog, CatalogReport, DanglingDependency, DependencyGraph, GraphError};
pub use resolver::{resolve, resolve_strict, DependencySource};
