//! pathprep-generate: Random graph fixtures for shortest-path algorithms.
//!
//! Drives a step-wise random generator into an in-memory graph, turns the
//! generator's fractional edge weights into small integers, and resets node
//! distances to the "unvisited" sentinel before a path search runs.

pub mod error;
pub mod generator;
pub mod reset;
pub mod synthesize;
pub mod types;

pub use error::GenerateError;
pub use generator::{Generator, RandomGenerator, RandomOptions};
pub use reset::reset_distances;
pub use synthesize::{generate_graph, generate_graph_with, quantize_weights};
pub use types::{GenerateRequest, GeneratedGraph, GenerationReport};

use pathprep_core::AttributeNames;
use pathprep_graph::Graph;

/// Synthesizer and resetter sharing one set of attribute names.
///
/// Keeping the names on the engine means a graph generated by it is always
/// reset and read under the same names.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    names: AttributeNames,
}

impl Synthesizer {
    /// Create an engine using the default `weight` / `distance` names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom attribute names.
    pub fn with_attribute_names(mut self, names: AttributeNames) -> Self {
        self.names = names;
        self
    }

    /// Names this engine reads and writes.
    pub fn attribute_names(&self) -> &AttributeNames {
        &self.names
    }

    /// Populate `graph` and return the generator for further stepping.
    pub fn generate(
        &self,
        graph: &mut Graph,
        request: &GenerateRequest,
    ) -> error::Result<RandomGenerator> {
        generate_graph(graph, request, &self.names)
    }

    /// Generate into a fresh graph and summarize the run.
    pub fn generate_report(&self, request: &GenerateRequest) -> error::Result<GeneratedGraph> {
        let mut graph = Graph::new();
        let generator = self.generate(&mut graph, request)?;
        let report = GenerationReport::new(&graph, &generator, request);
        Ok(GeneratedGraph { report, graph })
    }

    /// Re-quantize weights after a resumed generation.
    pub fn quantize(&self, graph: &mut Graph) -> error::Result<usize> {
        quantize_weights(graph, &self.names.weight)
    }

    pub fn reset_distances(&self, graph: &mut Graph) {
        reset_distances(graph, &self.names);
    }
}
