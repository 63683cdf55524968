//! Event-driven random graph generation.
//!
//! A [`Generator`] produces topology as a stream of [`GraphEvent`]s pushed
//! into a [`GraphSink`]. The caller owns both the generator and the sink, so
//! a run can be paused after any step and resumed later against the same
//! graph.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pathprep_core::{AttrValue, GraphEvent, GraphSink};

/// Probability that a step removes one existing edge when removal is allowed.
pub const REMOVE_PROBABILITY: f64 = 0.5;

/// Step-wise graph generator.
pub trait Generator {
    /// Emit the seed topology.
    fn begin<S: GraphSink>(&mut self, sink: &mut S) -> Result<(), S::Error>;

    /// Perform one generation step. Returns whether further steps are possible.
    fn next_events<S: GraphSink>(&mut self, sink: &mut S) -> Result<bool, S::Error>;

    /// Finish a run. Generators may still be stepped afterwards.
    fn end<S: GraphSink>(&mut self, sink: &mut S) -> Result<(), S::Error>;

    /// Keep generated numeric ids at or above `first_free`.
    ///
    /// Called before `begin` when the target graph already holds elements.
    /// Generators that do not number their elements can ignore it.
    fn start_ids_at(&mut self, _first_free: u64) {}
}

/// Parameters for [`RandomGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct RandomOptions {
    /// Target mean degree of the generated graph.
    pub average_degree: f64,
    /// Whether a step may also remove an existing edge.
    pub allow_remove: bool,
    /// Whether generated edges are directed.
    pub directed: bool,
    /// Node attribute to stamp with a uniform `[0, 1)` value, if any.
    pub node_attribute: Option<String>,
    /// Edge attribute to stamp with a uniform `[0, 1)` value, if any.
    pub edge_attribute: Option<String>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            average_degree: 1.0,
            allow_remove: false,
            directed: false,
            node_attribute: None,
            edge_attribute: None,
        }
    }
}

/// Grows a random graph one node per step.
///
/// The seed is two nodes `"0"` and `"1"` joined by edge `"0_1"` (ids shift
/// up when [`Generator::start_ids_at`] moves the first id). Each step
/// adds node `n` and links it to every earlier node with probability
/// `min(1, (d / 2 + r) / n)`, where `d` is the target average degree and `r`
/// the expected removals per step. On average a step therefore adds `d / 2`
/// net edges, which keeps the mean degree near `d`.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    options: RandomOptions,
    rng: SmallRng,
    /// Node ids emitted so far, in creation order.
    nodes: Vec<String>,
    /// Ids of edges emitted and not yet removed.
    edges: Vec<String>,
    next_node: u64,
    steps: u64,
    started: bool,
}

impl RandomGenerator {
    pub fn new(options: RandomOptions, rng: SmallRng) -> Self {
        Self {
            options,
            rng,
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node: 0,
            steps: 0,
            started: false,
        }
    }

    /// Build a generator from a fixed seed, or from OS entropy when `seed` is `None`.
    pub fn from_seed(options: RandomOptions, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::new(options, rng)
    }

    pub fn options(&self) -> &RandomOptions {
        &self.options
    }

    /// Number of `next_events` steps performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether `begin` has run.
    pub fn is_started(&self) -> bool {
        self.started
    }

    fn link_probability(&self, existing: usize) -> f64 {
        if existing == 0 {
            return 0.0;
        }
        let removal = if self.options.allow_remove {
            REMOVE_PROBABILITY
        } else {
            0.0
        };
        ((self.options.average_degree / 2.0 + removal) / existing as f64).min(1.0)
    }

    fn add_node<S: GraphSink>(&mut self, sink: &mut S) -> Result<String, S::Error> {
        let node_id = self.next_node.to_string();
        self.next_node += 1;

        sink.apply(&GraphEvent::NodeAdded {
            node_id: node_id.clone(),
        })?;
        if let Some(name) = &self.options.node_attribute {
            let value: f64 = self.rng.gen();
            sink.apply(&GraphEvent::NodeAttributeSet {
                node_id: node_id.clone(),
                name: name.clone(),
                value: AttrValue::Float(value),
            })?;
        }

        self.nodes.push(node_id.clone());
        Ok(node_id)
    }

    /// Connect two nodes, picking a random orientation for directed graphs.
    fn link<S: GraphSink>(&mut self, sink: &mut S, a: &str, b: &str) -> Result<(), S::Error> {
        if self.options.directed && self.rng.gen_bool(0.5) {
            self.add_edge(sink, b, a)
        } else {
            self.add_edge(sink, a, b)
        }
    }

    fn add_edge<S: GraphSink>(
        &mut self,
        sink: &mut S,
        source_id: &str,
        target_id: &str,
    ) -> Result<(), S::Error> {
        let edge_id = format!("{source_id}_{target_id}");

        sink.apply(&GraphEvent::EdgeAdded {
            edge_id: edge_id.clone(),
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            directed: self.options.directed,
        })?;
        if let Some(name) = &self.options.edge_attribute {
            let value: f64 = self.rng.gen();
            sink.apply(&GraphEvent::EdgeAttributeSet {
                edge_id: edge_id.clone(),
                name: name.clone(),
                value: AttrValue::Float(value),
            })?;
        }

        self.edges.push(edge_id);
        Ok(())
    }

    fn remove_random_edge<S: GraphSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        if self.edges.is_empty() {
            return Ok(());
        }
        let index = self.rng.gen_range(0..self.edges.len());
        let edge_id = self.edges.swap_remove(index);
        sink.apply(&GraphEvent::EdgeRemoved { edge_id })
    }
}

impl Generator for RandomGenerator {
    fn start_ids_at(&mut self, first_free: u64) {
        if self.started {
            tracing::warn!(first_free, "Generator already started, keeping its id sequence");
            return;
        }
        self.next_node = self.next_node.max(first_free);
    }

    fn begin<S: GraphSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        if self.started {
            tracing::warn!("Generator already started, ignoring begin");
            return Ok(());
        }
        self.started = true;

        let first = self.add_node(sink)?;
        let second = self.add_node(sink)?;
        self.add_edge(sink, &first, &second)?;

        tracing::debug!(
            average_degree = self.options.average_degree,
            allow_remove = self.options.allow_remove,
            directed = self.options.directed,
            "Random generator started"
        );
        Ok(())
    }

    fn next_events<S: GraphSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if !self.started {
            self.begin(sink)?;
        }

        self.steps += 1;
        sink.apply(&GraphEvent::StepBegins { step: self.steps })?;

        if self.options.allow_remove && self.rng.gen_bool(REMOVE_PROBABILITY) {
            self.remove_random_edge(sink)?;
        }

        let existing = self.nodes.len();
        let p = self.link_probability(existing);
        let new_node = self.add_node(sink)?;

        for index in 0..existing {
            if self.rng.gen::<f64>() < p {
                let other = self.nodes[index].clone();
                self.link(sink, &other, &new_node)?;
            }
        }

        Ok(true)
    }

    fn end<S: GraphSink>(&mut self, _sink: &mut S) -> Result<(), S::Error> {
        tracing::debug!(
            steps = self.steps,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "Random generator finished"
        );
        Ok(())
    }
}
