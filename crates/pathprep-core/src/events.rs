//! Topology events emitted by graph generators.
//!
//! A generator never touches a graph directly: it describes each mutation as
//! a [`GraphEvent`] and hands it to a [`GraphSink`], which decides what to do
//! with it (apply it to a graph, record it, ...).

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::types::AttrValue;

/// A single topology or attribute mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum GraphEvent {
    // ── Step lifecycle ────────────────────────────────────────
    /// A generation step started. Steps are numbered from 1.
    StepBegins { step: u64 },

    // ── Topology ──────────────────────────────────────────────
    NodeAdded {
        node_id: String,
    },
    NodeRemoved {
        node_id: String,
    },
    EdgeAdded {
        edge_id: String,
        source_id: String,
        target_id: String,
        directed: bool,
    },
    EdgeRemoved {
        edge_id: String,
    },

    // ── Attributes ────────────────────────────────────────────
    NodeAttributeSet {
        node_id: String,
        name: String,
        value: AttrValue,
    },
    EdgeAttributeSet {
        edge_id: String,
        name: String,
        value: AttrValue,
    },
}

/// Receiver of generation events.
pub trait GraphSink {
    type Error;

    /// Apply one event. An error stops the generator that produced it.
    fn apply(&mut self, event: &GraphEvent) -> Result<(), Self::Error>;
}

/// Recording sink: keeps every event in arrival order.
impl GraphSink for Vec<GraphEvent> {
    type Error = Infallible;

    fn apply(&mut self, event: &GraphEvent) -> Result<(), Self::Error> {
        self.push(event.clone());
        Ok(())
    }
}

impl<S: GraphSink + ?Sized> GraphSink for &mut S {
    type Error = S::Error;

    fn apply(&mut self, event: &GraphEvent) -> Result<(), Self::Error> {
        (**self).apply(event)
    }
}
