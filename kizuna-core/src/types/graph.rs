//! The similarity graph and its renderer-facing export model.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use smallvec::SmallVec;

use super::collections::FxHashMap;

/// Node payload: one person.
#[derive(Debug, Clone)]
pub struct PersonNode {
    /// Person id (unique display name).
    pub name: String,
    /// Size of the person's feature set; renderers use it as a size hint.
    pub feature_count: usize,
}

/// Edge payload: a weighted tie between two people.
#[derive(Debug, Clone)]
pub struct TieEdge {
    /// Sum of per-token weights over the shared tokens.
    pub score: f64,
    /// Display-sorted labels of the shared tokens.
    pub common: SmallVec<[String; 4]>,
    /// Number of shared tokens.
    pub common_count: usize,
}

/// Undirected, simple similarity graph. No self-loops, no parallel edges;
/// isolated nodes are valid output. Rebuilt from scratch on every parameter
/// change — never mutated incrementally.
#[derive(Debug, Default)]
pub struct SimilarityGraph {
    /// The underlying undirected graph.
    pub graph: UnGraph<PersonNode, TieEdge>,
    /// Person name → node index.
    pub index: FxHashMap<String, NodeIndex>,
}

impl SimilarityGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add a person node. Names are unique ids; a repeated name returns the
    /// existing node untouched.
    pub fn add_person(&mut self, name: String, feature_count: usize) -> NodeIndex {
        if let Some(&idx) = self.index.get(&name) {
            return idx;
        }
        let idx = self.graph.add_node(PersonNode {
            name: name.clone(),
            feature_count,
        });
        self.index.insert(name, idx);
        idx
    }

    /// Add a tie between two distinct people.
    pub fn add_tie(&mut self, a: NodeIndex, b: NodeIndex, edge: TieEdge) {
        self.graph.add_edge(a, b, edge);
    }

    /// Node index for a person name, if present.
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// The tie between two people, if an edge was admitted.
    pub fn tie(&self, a: &str, b: &str) -> Option<&TieEdge> {
        let (a, b) = (self.node(a)?, self.node(b)?);
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge)
    }

    /// Flatten into the node/edge model handed to rendering collaborators.
    pub fn export(&self) -> GraphExport {
        let nodes = self
            .graph
            .node_indices()
            .map(|idx| {
                let node = &self.graph[idx];
                NodeExport {
                    id: node.name.clone(),
                    degree_hint: node.feature_count,
                }
            })
            .collect();

        let edges = self
            .graph
            .edge_references()
            .map(|edge| EdgeExport {
                a: self.graph[edge.source()].name.clone(),
                b: self.graph[edge.target()].name.clone(),
                score: edge.weight().score,
                common_count: edge.weight().common_count,
                common_features: edge.weight().common.to_vec(),
            })
            .collect();

        GraphExport { nodes, edges }
    }
}

/// One node as handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct NodeExport {
    pub id: String,
    pub degree_hint: usize,
}

/// One edge as handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeExport {
    pub a: String,
    pub b: String,
    pub score: f64,
    pub common_count: usize,
    pub common_features: Vec<String>,
}

/// Flat node/edge model for rendering and export collaborators.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<EdgeExport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_add_person_dedups_by_name() {
        let mut graph = SimilarityGraph::default();
        let a = graph.add_person("佐藤".to_string(), 3);
        let b = graph.add_person("佐藤".to_string(), 5);
        assert_eq!(a, b);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.graph[a].feature_count, 3);
    }

    #[test]
    fn test_tie_lookup_is_direction_agnostic() {
        let mut graph = SimilarityGraph::default();
        let a = graph.add_person("a".to_string(), 1);
        let b = graph.add_person("b".to_string(), 1);
        graph.add_tie(
            a,
            b,
            TieEdge {
                score: 2.0,
                common: smallvec!["温泉".to_string()],
                common_count: 1,
            },
        );
        assert_eq!(graph.tie("a", "b").unwrap().score, 2.0);
        assert_eq!(graph.tie("b", "a").unwrap().score, 2.0);
        assert!(graph.tie("a", "c").is_none());
    }

    #[test]
    fn test_export_carries_degree_hint() {
        let mut graph = SimilarityGraph::default();
        graph.add_person("a".to_string(), 4);
        let export = graph.export();
        assert_eq!(export.nodes.len(), 1);
        assert_eq!(export.nodes[0].degree_hint, 4);
        assert!(export.edges.is_empty());
    }
}
