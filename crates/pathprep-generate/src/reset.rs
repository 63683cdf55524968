//! Distance reset performed before running a shortest-path search.

use pathprep_core::{AttributeNames, UNSET_DISTANCE};
use pathprep_graph::{apply_to_nodes, Graph};

/// Set every node's distance attribute to [`UNSET_DISTANCE`].
///
/// Only the distance attribute is written; edges and other node attributes
/// are left alone. Running it twice is the same as running it once.
pub fn reset_distances(graph: &mut Graph, names: &AttributeNames) {
    apply_to_nodes(graph, |node| {
        node.set_attribute(names.distance.as_str(), UNSET_DISTANCE);
    });

    tracing::debug!(
        nodes = graph.node_count(),
        attribute = %names.distance,
        "Reset node distances"
    );
}
