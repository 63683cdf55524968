//! Graph, node, and edge types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use pathprep_core::{AttrValue, PathprepError};

use crate::queries::GraphRecord;

/// Errors from graph operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("Edge already exists: {id}")]
    DuplicateEdge { id: String },

    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Edge not found: {id}")]
    EdgeNotFound { id: String },

    #[error("Attribute error: {0}")]
    Attribute(#[from] PathprepError),
}

pub type Attributes = BTreeMap<String, AttrValue>;

/// A graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attributes.insert(name.into(), value.into())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.remove(name)
    }

    pub fn attribute_i64(&self, name: &str) -> Result<i64, PathprepError> {
        required(&self.attributes, "node", &self.id, name)?.as_i64()
    }

    pub fn attribute_f64(&self, name: &str) -> Result<f64, PathprepError> {
        required(&self.attributes, "node", &self.id, name)?.as_f64()
    }
}

/// A graph edge. Undirected edges connect `source_id` and `target_id` both ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default)]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        directed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            directed,
            attributes: Attributes::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attributes.insert(name.into(), value.into())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.remove(name)
    }

    pub fn attribute_i64(&self, name: &str) -> Result<i64, PathprepError> {
        required(&self.attributes, "edge", &self.id, name)?.as_i64()
    }

    pub fn attribute_f64(&self, name: &str) -> Result<f64, PathprepError> {
        required(&self.attributes, "edge", &self.id, name)?.as_f64()
    }

    /// The endpoint on the other side of `node_id`, if the edge touches it.
    pub fn opposite(&self, node_id: &str) -> Option<&str> {
        if self.source_id == node_id {
            Some(&self.target_id)
        } else if self.target_id == node_id {
            Some(&self.source_id)
        } else {
            None
        }
    }
}

fn required<'a>(
    attributes: &'a Attributes,
    kind: &str,
    id: &str,
    name: &str,
) -> Result<&'a AttrValue, PathprepError> {
    attributes
        .get(name)
        .ok_or_else(|| PathprepError::MissingAttribute {
            element: format!("{kind} {id}"),
            name: name.to_string(),
        })
}

/// Mutable in-memory graph.
///
/// Iteration order over nodes and edges is by id, so seeded generation runs
/// produce byte-identical JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord", into = "GraphRecord")]
pub struct Graph {
    pub(crate) nodes: BTreeMap<String, Node>,
    pub(crate) edges: BTreeMap<String, Edge>,
    /// node id → ids of edges touching it.
    pub(crate) incidence: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }
}
