//! Run an action over every node or every edge of a graph.
//!
//! The action sees each element exactly once, in id order, and the call
//! returns only after the whole pass. The fallible variants stop at the
//! first error and return it as-is: elements already visited keep their
//! changes, later ones are left untouched.

use crate::graph::{Edge, Graph, Node};

pub fn apply_to_nodes<F>(graph: &mut Graph, mut action: F)
where
    F: FnMut(&mut Node),
{
    graph.nodes_mut().for_each(|node| action(node));
}

pub fn apply_to_edges<F>(graph: &mut Graph, mut action: F)
where
    F: FnMut(&mut Edge),
{
    graph.edges_mut().for_each(|edge| action(edge));
}

pub fn try_apply_to_nodes<F, E>(graph: &mut Graph, action: F) -> Result<(), E>
where
    F: FnMut(&mut Node) -> Result<(), E>,
{
    graph.nodes_mut().try_for_each(action)
}

pub fn try_apply_to_edges<F, E>(graph: &mut Graph, action: F) -> Result<(), E>
where
    F: FnMut(&mut Edge) -> Result<(), E>,
{
    graph.edges_mut().try_for_each(action)
}
