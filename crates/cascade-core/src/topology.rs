//! Client topology — directed system→dependents graph used to estimate
//! blast radius. The graph may be cyclic; traversal never assumes a DAG.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// Service tier of a client, used by the decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientTier {
    Enterprise,
    Business,
    #[default]
    Standard,
}

impl ClientTier {
    /// Normalized weight for impact scoring.
    pub fn weight(self) -> f64 {
        match self {
            ClientTier::Enterprise => 1.0,
            ClientTier::Business => 0.7,
            ClientTier::Standard => 0.4,
        }
    }
}

/// A client's system topology: critical systems plus a dependency graph
/// with edges system → dependent (the dependent breaks when the system does).
#[derive(Debug, Clone)]
pub struct ClientTopology {
    pub client_id: String,
    pub tier: ClientTier,
    critical_systems: HashSet<String>,
    graph: StableGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl ClientTopology {
    pub fn new(client_id: impl Into<String>, tier: ClientTier) -> Self {
        Self {
            client_id: client_id.into(),
            tier,
            critical_systems: HashSet::new(),
            graph: StableGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Build from a plain system → dependents map.
    pub fn from_dependency_map(
        client_id: impl Into<String>,
        tier: ClientTier,
        dependencies: &HashMap<String, Vec<String>>,
        critical: &[String],
    ) -> Self {
        let mut topo = Self::new(client_id, tier);
        for (system, dependents) in dependencies {
            for dependent in dependents {
                topo.add_dependency(system, dependent);
            }
        }
        for system in critical {
            topo.mark_critical(system);
        }
        topo
    }

    fn ensure_node(&mut self, system: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(system) {
            return idx;
        }
        let idx = self.graph.add_node(system.to_string());
        self.index.insert(system.to_string(), idx);
        idx
    }

    /// Record that `dependent` depends on `system`.
    pub fn add_dependency(&mut self, system: &str, dependent: &str) {
        let src = self.ensure_node(system);
        let dst = self.ensure_node(dependent);
        if !self.graph.contains_edge(src, dst) {
            self.graph.add_edge(src, dst, ());
        }
    }

    /// Mark a system as business-critical.
    pub fn mark_critical(&mut self, system: &str) {
        self.ensure_node(system);
        self.critical_systems.insert(system.to_string());
    }

    pub fn is_critical(&self, system: &str) -> bool {
        self.critical_systems.contains(system)
    }

    pub fn critical_systems(&self) -> &HashSet<String> {
        &self.critical_systems
    }

    /// Systems that break when `system` does (outgoing edges).
    pub fn dependents_of(&self, system: &str) -> Vec<String> {
        self.neighbors(system, Direction::Outgoing)
    }

    /// Systems `system` depends on (incoming edges).
    pub fn dependencies_of(&self, system: &str) -> Vec<String> {
        self.neighbors(system, Direction::Incoming)
    }

    fn neighbors(&self, system: &str, dir: Direction) -> Vec<String> {
        let Some(&idx) = self.index.get(system) else {
            return Vec::new();
        };
        let mut out: Vec<String> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].clone())
            .collect();
        out.sort();
        out
    }

    /// One-hop blast radius of a set of affected systems: the systems
    /// themselves plus forward and reverse neighbors, deduplicated.
    pub fn blast_radius<'a>(&self, systems: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        for system in systems {
            seen.insert(system.to_string());
            seen.extend(self.dependents_of(system));
            seen.extend(self.dependencies_of(system));
        }
        let mut out: Vec<String> = seen.into_iter().collect();
        out.sort();
        out
    }

    /// Total count of systems depending (directly) on any of the given systems.
    pub fn dependent_count<'a>(&self, systems: impl IntoIterator<Item = &'a str>) -> usize {
        let mut seen: HashSet<String> = HashSet::new();
        for system in systems {
            seen.extend(self.dependents_of(system));
        }
        seen.len()
    }

    /// Number of known systems.
    pub fn system_count(&self) -> usize {
        self.graph.node_count()
    }
}
