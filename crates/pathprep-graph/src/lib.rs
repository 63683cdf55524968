//! pathprep-graph — in-memory attributed graph.
//!
//! Nodes and edges are keyed by string ids and carry named attributes.
//! Generators feed the graph through its [`GraphSink`](pathprep_core::GraphSink)
//! implementation; callers read and rewrite attributes through the
//! traversal helpers.

pub mod graph;
pub mod mutations;
pub mod queries;
pub mod sink;
pub mod traverse;

pub use graph::{Edge, Graph, GraphError, Node};
pub use queries::GraphRecord;
pub use traverse::{apply_to_edges, apply_to_nodes, try_apply_to_edges, try_apply_to_nodes};
