//! Read operations and the JSON record format for the graph.

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Graph, GraphError, Node};

/// Serialized shape of a [`Graph`]: flat node and edge lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphRecord {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl From<Graph> for GraphRecord {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes.into_values().collect(),
            edges: graph.edges.into_values().collect(),
        }
    }
}

impl TryFrom<GraphRecord> for Graph {
    type Error = GraphError;

    /// Rebuild a graph, rejecting duplicate ids and dangling edges.
    fn try_from(record: GraphRecord) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        for node in record.nodes {
            let attributes = node.attributes;
            graph.add_node(node.id)?.attributes = attributes;
        }
        for edge in record.edges {
            let attributes = edge.attributes;
            graph
                .add_edge(edge.id, &edge.source_id, &edge.target_id, edge.directed)?
                .attributes = attributes;
        }
        Ok(graph)
    }
}

impl Graph {
    // ── Single Element Lookups ───────────────────────────────────

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn has_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    // ── Enumeration ──────────────────────────────────────────────

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// All edges, ordered by id.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.values_mut()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Neighbourhood ────────────────────────────────────────────

    /// Number of edges touching a node, regardless of direction.
    pub fn degree(&self, node_id: &str) -> Result<usize, GraphError> {
        self.incidence
            .get(node_id)
            .map(|edges| edges.len())
            .ok_or_else(|| GraphError::NodeNotFound {
                id: node_id.to_string(),
            })
    }

    /// Edges touching a node, ordered by edge id.
    pub fn incident_edges(&self, node_id: &str) -> Result<Vec<&Edge>, GraphError> {
        let ids = self
            .incidence
            .get(node_id)
            .ok_or_else(|| GraphError::NodeNotFound {
                id: node_id.to_string(),
            })?;
        Ok(ids.iter().filter_map(|id| self.edges.get(id)).collect())
    }

    /// Mean number of edge endpoints per node (`2E / N`), or 0 for an empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        (2 * self.edges.len()) as f64 / self.nodes.len() as f64
    }

    // ── Counting ─────────────────────────────────────────────────

    pub fn count_nodes_where(&self, predicate: impl Fn(&Node) -> bool) -> usize {
        self.nodes.values().filter(|&n| predicate(n)).count()
    }

    pub fn count_edges_where(&self, predicate: impl Fn(&Edge) -> bool) -> usize {
        self.edges.values().filter(|&e| predicate(e)).count()
    }
}
