//! Applying generator events to a graph.

use pathprep_core::{GraphEvent, GraphSink};

use crate::graph::{Graph, GraphError};

impl GraphSink for Graph {
    type Error = GraphError;

    fn apply(&mut self, event: &GraphEvent) -> Result<(), GraphError> {
        tracing::trace!(?event, "Applying graph event");

        match event {
            GraphEvent::StepBegins { .. } => {}
            GraphEvent::NodeAdded { node_id } => {
                self.add_node(node_id.as_str())?;
            }
            GraphEvent::NodeRemoved { node_id } => {
                self.remove_node(node_id)?;
            }
            GraphEvent::EdgeAdded {
                edge_id,
                source_id,
                target_id,
                directed,
            } => {
                self.add_edge(edge_id.as_str(), source_id, target_id, *directed)?;
            }
            GraphEvent::EdgeRemoved { edge_id } => {
                self.remove_edge(edge_id)?;
            }
            GraphEvent::NodeAttributeSet {
                node_id,
                name,
                value,
            } => {
                self.set_node_attribute(node_id, name.as_str(), value.clone())?;
            }
            GraphEvent::EdgeAttributeSet {
                edge_id,
                name,
                value,
            } => {
                self.set_edge_attribute(edge_id, name.as_str(), value.clone())?;
            }
        }

        Ok(())
    }
}
