//! Random graph synthesis with integer edge weights.

use std::time::Instant;

use pathprep_core::{AttrValue, AttributeNames, PathprepError};
use pathprep_graph::{try_apply_to_edges, Graph};

use crate::error::Result;
use crate::generator::{Generator, RandomGenerator, RandomOptions};
use crate::types::GenerateRequest;

/// Generator options matching a request and the configured attribute names.
pub fn random_options(request: &GenerateRequest, names: &AttributeNames) -> RandomOptions {
    RandomOptions {
        average_degree: request.average_degree,
        allow_remove: request.allow_remove,
        directed: request.directed,
        node_attribute: names.node_value.clone(),
        edge_attribute: request.add_weight.then(|| names.weight.clone()),
    }
}

/// Populate `graph` with a random topology and return the generator used.
///
/// The returned generator can be stepped further against the same graph.
/// Weights added by such later steps stay fractional until
/// [`quantize_weights`] is called again.
pub fn generate_graph(
    graph: &mut Graph,
    request: &GenerateRequest,
    names: &AttributeNames,
) -> Result<RandomGenerator> {
    let generator = RandomGenerator::from_seed(random_options(request, names), request.seed);
    generate_graph_with(graph, request, names, generator)
}

/// Like [`generate_graph`], driving a caller-supplied generator.
///
/// When `request.add_weight` is set the generator must stamp every new edge
/// with a float under `names.weight`. Elements already in `graph` are kept;
/// the generator is told to number its own elements past them.
pub fn generate_graph_with<G: Generator>(
    graph: &mut Graph,
    request: &GenerateRequest,
    names: &AttributeNames,
    mut generator: G,
) -> Result<G> {
    request.validate()?;
    if request.add_weight {
        check_existing_weights(graph, &names.weight)?;
    }
    let start = Instant::now();

    if !graph.is_empty() {
        let first_free = first_free_id(graph);
        tracing::debug!(first_free, "Target graph not empty, shifting generated ids");
        generator.start_ids_at(first_free);
    }

    generator.begin(graph)?;
    for _ in 0..request.event_count {
        generator.next_events(graph)?;
    }
    generator.end(graph)?;

    if request.add_weight {
        quantize_weights(graph, &names.weight)?;
    }

    tracing::info!(
        events = request.event_count,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        weighted = request.add_weight,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Graph synthesized"
    );
    Ok(generator)
}

/// Smallest number above every numeric id, or numeric part of an
/// `<a>_<b>` edge id, already in the graph.
pub fn first_free_id(graph: &Graph) -> u64 {
    let node_ids = graph.nodes().map(|n| n.id.as_str());
    let edge_parts = graph.edges().flat_map(|e| e.id.split('_'));

    node_ids
        .chain(edge_parts)
        .filter_map(|part| part.parse::<u64>().ok())
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Fail before generating if an existing edge holds a weight that cannot be quantized.
fn check_existing_weights(graph: &Graph, weight_name: &str) -> Result<()> {
    for edge in graph.edges() {
        if let Some(AttrValue::Str(_)) = edge.attribute(weight_name) {
            return Err(PathprepError::TypeMismatch {
                expected: "float",
                found: "string",
            }
            .into());
        }
    }
    Ok(())
}

/// Map a `[0, 1)` weight onto the integers `0..=9`.
pub fn scale_weight(weight: f64) -> i64 {
    (weight * 10.0).floor() as i64
}

/// Replace every fractional edge weight with [`scale_weight`] of itself.
///
/// Edges whose weight is already an integer are left as they are, so the
/// pass can run again after a resumed generation without rescaling twice.
/// Edges without a weight carry nothing to rescale and are skipped. A
/// string weight stops the pass with an error; edges visited before it keep
/// their new value. Returns the number of edges rewritten.
pub fn quantize_weights(graph: &mut Graph, weight_name: &str) -> Result<usize> {
    let mut rewritten = 0;

    try_apply_to_edges(graph, |edge| {
        match edge.attribute(weight_name) {
            None => return Ok(()),
            Some(value) if value.is_int() => return Ok(()),
            Some(_) => {}
        }
        let weight = edge.attribute_f64(weight_name)?;
        edge.set_attribute(weight_name, scale_weight(weight));
        rewritten += 1;
        Ok::<(), PathprepError>(())
    })?;

    tracing::debug!(rewritten, attribute = weight_name, "Quantized edge weights");
    Ok(rewritten)
}
