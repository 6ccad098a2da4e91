use super::graph::GraphError;
use crate::entities::{Catalog, ToolDescriptor};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// The slice of a catalog the resolver needs.
pub trait DependencySource {
    fn contains(&self, id: &str) -> bool;
    fn dependencies_of(&self, id: &str) -> &[String];
    /// Every id known to the source, in any order.
    fn tool_ids(&self) -> Vec<&str>;
}

impl DependencySource for Catalog {
    fn contains(&self, id: &str) -> bool {
        Catalog::contains(self, id)
    }

    fn dependencies_of(&self, id: &str) -> &[String] {
        self.get(id).map_or(&[], |tool| tool.dependencies.as_slice())
    }

    fn tool_ids(&self) -> Vec<&str> {
        self.iter().map(|(_, tool)| tool.id.as_str()).collect()
    }
}

impl DependencySource for HashMap<String, ToolDescriptor> {
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn dependencies_of(&self, id: &str) -> &[String] {
        self.get(id).map_or(&[], |tool| tool.dependencies.as_slice())
    }

    fn tool_ids(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Depth-first post-order walk. Requested ids and every dependency list are
/// visited in sorted order so the output never depends on hash ordering.
struct Walk<'a, S: ?Sized> {
    source: &'a S,
    strict: bool,
    marks: HashMap<String, Mark>,
    order: Vec<String>,
}

impl<'a, S: DependencySource + ?Sized> Walk<'a, S> {
    fn new(source: &'a S, strict: bool) -> Self {
        Self {
            source,
            strict,
            marks: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn run<'s>(
        mut self,
        selected: impl IntoIterator<Item = &'s String>,
    ) -> Result<Vec<String>, GraphError> {
        let mut requested: Vec<&String> = selected.into_iter().collect();
        requested.sort();
        requested.dedup();

        for id in requested {
            if self.source.contains(id) {
                self.visit(id)?;
            } else {
                debug!(tool = %id, "requested tool is not in the catalog, dropping");
            }
        }
        Ok(self.order)
    }

    /// Iterative so that chain depth is bounded by the heap, not the call stack.
    fn visit(&mut self, root: &str) -> Result<(), GraphError> {
        if !self.enter(root)? {
            return Ok(());
        }

        let mut stack = vec![(root.to_string(), self.children(root))];
        loop {
            let next = match stack.last_mut() {
                Some((_, deps)) => deps.next(),
                None => break,
            };

            match next {
                Some(dep) if !self.source.contains(dep) => {
                    debug!(dependency = %dep, "ignoring dependency missing from catalog");
                }
                Some(dep) => {
                    if self.enter(dep)? {
                        stack.push((dep.clone(), self.children(dep)));
                    }
                }
                None => {
                    if let Some((id, _)) = stack.pop() {
                        self.place(id);
                    }
                }
            }
        }
        Ok(())
    }

    /// Marks `id` in progress. `false` means it is already placed or is a
    /// back edge the lenient walk treats as satisfied.
    fn enter(&mut self, id: &str) -> Result<bool, GraphError> {
        match self.marks.get(id) {
            Some(Mark::Done) => Ok(false),
            Some(Mark::InProgress) if self.strict => Err(GraphError::Cycle(id.to_string())),
            Some(Mark::InProgress) => {
                warn!(tool = id, "dependency cycle detected, treating edge as satisfied");
                Ok(false)
            }
            None => {
                self.marks.insert(id.to_string(), Mark::InProgress);
                Ok(true)
            }
        }
    }

    fn children(&self, id: &str) -> std::vec::IntoIter<&'a String> {
        let source: &'a S = self.source;
        let mut deps: Vec<&'a String> = source.dependencies_of(id).iter().collect();
        deps.sort();
        deps.dedup();
        deps.into_iter()
    }

    fn place(&mut self, id: String) {
        debug!(tool = %id, position = self.order.len(), "placed in install order");
        self.marks.insert(id.clone(), Mark::Done);
        self.order.push(id);
    }
}

/// Linear install order for `selected` plus everything they transitively
/// depend on. Unknown ids are dropped and cycles are broken at the edge that
/// closes them; resolution itself never fails.
pub fn resolve<S>(selected: &BTreeSet<String>, source: &S) -> Vec<String>
where
    S: DependencySource + ?Sized,
{
    // Cycle breaking means the lenient walk cannot return Err.
    Walk::new(source, false).run(selected).unwrap_or_default()
}

/// Same as [`resolve`] but reports the first dependency cycle it meets.
pub fn resolve_strict<S>(
    selected: &BTreeSet<String>,
    source: &S,
) -> Result<Vec<String>, GraphError>
where
    S: DependencySource + ?Sized,
{
    Walk::new(source, true).run(selected)
}
