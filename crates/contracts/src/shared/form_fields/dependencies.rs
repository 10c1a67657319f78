//! Declared cross-field dependencies.
//!
//! A field set lists `source -> target via Reaction` edges. The graph is
//! checked for cycles once and evaluated in topological order, so a change
//! reaches every dependent field in one deterministic pass.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::error::FormError;

/// Server lookup needed to compute a target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUpKind {
    /// Next free serial number for the selected part
    NextSerialNumber,
    /// Generated batch code for the selected part
    NextBatchCode,
    /// Expiry date from the part's default expiry (days)
    ExpiryFromPart,
}

impl FollowUpKind {
    /// True when the lookup result becomes the field value; otherwise it is
    /// only shown as the input placeholder and never submitted
    pub fn fills_value(self) -> bool {
        matches!(self, Self::ExpiryFromPart)
    }

    /// Placeholder text for a lookup result, for kinds that do not fill the value
    pub fn hint(self, result: &str) -> Option<String> {
        match self {
            Self::NextSerialNumber => Some(format!("Next serial number: {result}")),
            Self::NextBatchCode => Some(result.to_string()),
            Self::ExpiryFromPart => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    /// Reset the target value
    Clear,
    /// Restrict the target lookup: `filters[param] = source value`
    FilterBy { param: String },
    /// Recompute the target from the server
    Requery(FollowUpKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub source: String,
    pub target: String,
    pub reaction: Reaction,
}

impl Dependency {
    pub fn clear(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            reaction: Reaction::Clear,
        }
    }

    pub fn filter_by(source: &str, target: &str, param: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            reaction: Reaction::FilterBy {
                param: param.to_string(),
            },
        }
    }

    pub fn requery(source: &str, target: &str, kind: FollowUpKind) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            reaction: Reaction::Requery(kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    dependencies: Vec<Dependency>,
    /// Every field named by an edge, sources before their targets
    order: Vec<String>,
}

impl DependencyGraph {
    pub fn new(dependencies: Vec<Dependency>) -> Result<Self, FormError> {
        if let Some(dep) = dependencies.iter().find(|d| d.source == d.target) {
            return Err(FormError::SelfDependency(dep.source.clone()));
        }

        // Nodes in first-appearance order keeps the evaluation order stable
        let mut nodes: Vec<String> = Vec::new();
        for dep in &dependencies {
            for name in [&dep.source, &dep.target] {
                if !nodes.contains(name) {
                    nodes.push(name.clone());
                }
            }
        }

        let mut in_degree: HashMap<&str, usize> = nodes.iter().map(|n| (n.as_str(), 0)).collect();
        let mut edges: HashSet<(&str, &str)> = HashSet::new();
        for dep in &dependencies {
            if edges.insert((dep.source.as_str(), dep.target.as_str())) {
                *in_degree.entry(dep.target.as_str()).or_default() += 1;
            }
        }

        let mut order: Vec<String> = Vec::with_capacity(nodes.len());
        let mut placed: HashSet<&str> = HashSet::new();
        while order.len() < nodes.len() {
            let next = nodes
                .iter()
                .find(|n| !placed.contains(n.as_str()) && in_degree[n.as_str()] == 0);
            let Some(next) = next else {
                let remaining = nodes
                    .iter()
                    .filter(|n| !placed.contains(n.as_str()))
                    .cloned()
                    .collect();
                return Err(FormError::DependencyCycle(remaining));
            };

            placed.insert(next.as_str());
            order.push(next.clone());
            for (source, target) in &edges {
                if *source == next.as_str() {
                    if let Some(d) = in_degree.get_mut(target) {
                        *d -= 1;
                    }
                }
            }
        }

        Ok(Self {
            dependencies,
            order,
        })
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Fields in evaluation order
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Edges leaving `source`, in declaration order
    pub fn affected_by<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Dependency> + 'a {
        self.dependencies.iter().filter(move |d| d.source == source)
    }

    /// Names of the fields directly affected by `source`
    pub fn targets_of<'a>(&'a self, source: &'a str) -> Vec<&'a str> {
        let mut targets: Vec<&str> = Vec::new();
        for dep in self.affected_by(source) {
            if !targets.contains(&dep.target.as_str()) {
                targets.push(dep.target.as_str());
            }
        }
        targets
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_puts_sources_first() {
        let graph = DependencyGraph::new(vec![
            Dependency::clear("supplier_part", "pack_size"),
            Dependency::clear("part", "supplier_part"),
            Dependency::filter_by("part", "supplier_part", "part"),
        ])
        .unwrap();

        assert_eq!(graph.order(), &["part", "supplier_part", "pack_size"]);
        assert_eq!(graph.targets_of("part"), vec!["supplier_part"]);
    }

    #[test]
    fn cycles_are_rejected() {
        let err = DependencyGraph::new(vec![
            Dependency::clear("a", "b"),
            Dependency::clear("b", "c"),
            Dependency::clear("c", "a"),
        ])
        .unwrap_err();

        match err {
            FormError::DependencyCycle(fields) => assert_eq!(fields.len(), 3),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn self_dependency_is_rejected() {
        assert_eq!(
            DependencyGraph::new(vec![Dependency::clear("a", "a")]),
            Err(FormError::SelfDependency("a".to_string()))
        );
    }

    #[test]
    fn empty_graph() {
        let graph = DependencyGraph::new(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert!(graph.order().is_empty());
    }
}
