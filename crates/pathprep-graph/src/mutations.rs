//! Write operations for the in-memory graph.
//!
//! Ids are unique per element kind. Adding an element whose id is taken is an
//! error, not an upsert.

use pathprep_core::AttrValue;

use crate::graph::{Edge, Graph, GraphError, Node};

impl Graph {
    // ── Nodes ────────────────────────────────────────────────────

    /// Add a node with no attributes.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<&mut Node, GraphError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }

        self.incidence.insert(id.clone(), Default::default());
        Ok(self.nodes.entry(id.clone()).or_insert_with(|| Node::new(id)))
    }

    /// Remove a node together with every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Result<Node, GraphError> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| GraphError::NodeNotFound { id: id.to_string() })?;

        let incident = self.incidence.remove(id).unwrap_or_default();
        for edge_id in incident {
            if let Some(edge) = self.edges.remove(&edge_id) {
                if let Some(other) = edge.opposite(id) {
                    if let Some(set) = self.incidence.get_mut(other) {
                        set.remove(&edge_id);
                    }
                }
            }
        }

        Ok(node)
    }

    // ── Edges ────────────────────────────────────────────────────

    /// Add an edge between two existing nodes.
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        source_id: &str,
        target_id: &str,
        directed: bool,
    ) -> Result<&mut Edge, GraphError> {
        let id = id.into();
        if self.edges.contains_key(&id) {
            return Err(GraphError::DuplicateEdge { id });
        }
        for endpoint in [source_id, target_id] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::NodeNotFound {
                    id: endpoint.to_string(),
                });
            }
        }

        for endpoint in [source_id, target_id] {
            self.incidence
                .entry(endpoint.to_string())
                .or_default()
                .insert(id.clone());
        }

        let edge = Edge::new(id.clone(), source_id, target_id, directed);
        Ok(self.edges.entry(id).or_insert(edge))
    }

    /// Remove an edge. Its endpoints stay in the graph.
    pub fn remove_edge(&mut self, id: &str) -> Result<Edge, GraphError> {
        let edge = self
            .edges
            .remove(id)
            .ok_or_else(|| GraphError::EdgeNotFound { id: id.to_string() })?;

        for endpoint in [&edge.source_id, &edge.target_id] {
            if let Some(set) = self.incidence.get_mut(endpoint.as_str()) {
                set.remove(id);
            }
        }

        Ok(edge)
    }

    // ── Attributes ───────────────────────────────────────────────

    /// Set a node attribute, returning the previous value.
    pub fn set_node_attribute(
        &mut self,
        node_id: &str,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Option<AttrValue>, GraphError> {
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or_else(|| GraphError::NodeNotFound {
                id: node_id.to_string(),
            })?;
        Ok(node.set_attribute(name, value))
    }

    /// Set an edge attribute, returning the previous value.
    pub fn set_edge_attribute(
        &mut self,
        edge_id: &str,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Option<AttrValue>, GraphError> {
        let edge = self
            .edges
            .get_mut(edge_id)
            .ok_or_else(|| GraphError::EdgeNotFound {
                id: edge_id.to_string(),
            })?;
        Ok(edge.set_attribute(name, value))
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.incidence.clear();
    }
}
