//! Request and report types for graph synthesis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pathprep_graph::Graph;

use crate::error::{GenerateError, Result};
use crate::generator::RandomGenerator;

/// Parameters of one synthesis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Number of generation steps to perform. Must be non-negative.
    pub event_count: i64,
    /// Target mean degree. Must be finite and non-negative.
    pub average_degree: f64,
    /// Let steps remove existing edges as well as add new ones.
    #[serde(default)]
    pub allow_remove: bool,
    /// Generate directed edges.
    #[serde(default)]
    pub directed: bool,
    /// Attach an integer weight in `[0, 9]` to every edge.
    #[serde(default)]
    pub add_weight: bool,
    /// Seed for the random source (default: OS entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerateRequest {
    pub fn new(event_count: i64, average_degree: f64) -> Self {
        Self {
            event_count,
            average_degree,
            allow_remove: false,
            directed: false,
            add_weight: false,
            seed: None,
        }
    }

    pub fn with_weights(mut self) -> Self {
        self.add_weight = true;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject parameters that do not describe a generation run.
    pub fn validate(&self) -> Result<()> {
        if self.event_count < 0 {
            return Err(GenerateError::InvalidArgument {
                name: "event_count",
                reason: format!("must be non-negative, got {}", self.event_count),
            });
        }
        if !self.average_degree.is_finite() || self.average_degree < 0.0 {
            return Err(GenerateError::InvalidArgument {
                name: "average_degree",
                reason: format!(
                    "must be a non-negative number, got {}",
                    self.average_degree
                ),
            });
        }
        Ok(())
    }
}

/// Summary of a finished synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub steps: u64,
    pub node_count: usize,
    pub edge_count: usize,
    /// Observed mean degree (`2E / N`).
    pub average_degree: f64,
    pub directed: bool,
    pub weighted: bool,
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn new(graph: &Graph, generator: &RandomGenerator, request: &GenerateRequest) -> Self {
        Self {
            steps: generator.steps(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            average_degree: graph.average_degree(),
            directed: generator.options().directed,
            weighted: generator.options().edge_attribute.is_some(),
            seed: request.seed,
            generated_at: Utc::now(),
        }
    }
}

/// A generated graph together with its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedGraph {
    pub report: GenerationReport,
    pub graph: Graph,
}
