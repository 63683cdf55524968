//! End-to-end synthesis and reset scenarios against the in-memory graph.

use pathprep_core::{AttrValue, AttributeNames, GraphEvent, UNSET_DISTANCE};
use pathprep_generate::{
    generate_graph, generate_graph_with, quantize_weights, reset_distances, GenerateError,
    GenerateRequest, Generator, RandomGenerator, RandomOptions,
};
use pathprep_graph::Graph;

fn names() -> AttributeNames {
    AttributeNames::default()
}

fn weights(graph: &Graph) -> Vec<i64> {
    graph
        .edges()
        .map(|e| e.attribute_i64("weight").unwrap())
        .collect()
}

#[test]
fn zero_events_leaves_seed_topology() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(0, 2.0).with_seed(1);
    let generator = generate_graph(&mut graph, &request, &names()).unwrap();

    assert_eq!(generator.steps(), 0);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge("0_1"));
    assert_eq!(graph.count_edges_where(|e| e.attribute("weight").is_some()), 0);
}

#[test]
fn weighted_run_has_integer_weights_in_range() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(50, 3.0).with_weights().with_seed(2024);
    let generator = generate_graph(&mut graph, &request, &names()).unwrap();

    assert_eq!(generator.steps(), 50);
    assert_eq!(graph.node_count(), 52);
    assert!(graph.edge_count() > 1);
    for edge in graph.edges() {
        let weight = edge.attribute("weight").unwrap();
        assert!(weight.is_int(), "edge {} has {weight:?}", edge.id);
        assert!((0..=9).contains(&weight.as_i64().unwrap()));
    }
}

#[test]
fn reset_after_synthesis_keeps_weights() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(50, 3.0).with_weights().with_seed(2024);
    generate_graph(&mut graph, &request, &names()).unwrap();
    let before = weights(&graph);

    reset_distances(&mut graph, &names());

    assert_eq!(
        graph.count_nodes_where(|n| n.attribute("distance") != Some(&AttrValue::Int(UNSET_DISTANCE))),
        0
    );
    assert_eq!(weights(&graph), before);

    let snapshot = graph.clone();
    reset_distances(&mut graph, &names());
    assert_eq!(graph, snapshot);
}

#[test]
fn negative_event_count_is_rejected() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(-1, 2.0).with_weights();
    let err = generate_graph(&mut graph, &request, &names()).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::InvalidArgument {
            name: "event_count",
            ..
        }
    ));
    assert!(graph.is_empty());
}

#[test]
fn negative_degree_is_rejected() {
    let mut graph = Graph::new();
    let err = generate_graph(&mut graph, &GenerateRequest::new(10, -2.0), &names()).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::InvalidArgument {
            name: "average_degree",
            ..
        }
    ));
    assert!(graph.is_empty());
}

#[test]
fn seeded_runs_are_reproducible() {
    let request = GenerateRequest {
        allow_remove: true,
        directed: true,
        ..GenerateRequest::new(200, 4.0).with_weights().with_seed(77)
    };

    let mut first = Graph::new();
    let mut second = Graph::new();
    generate_graph(&mut first, &request, &names()).unwrap();
    generate_graph(&mut second, &request, &names()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn mean_degree_tracks_target() {
    for (target, seed) in [(2.0, 1_u64), (4.0, 2), (6.0, 3)] {
        let mut graph = Graph::new();
        let request = GenerateRequest::new(2000, target).with_seed(seed);
        generate_graph(&mut graph, &request, &names()).unwrap();

        let observed = graph.average_degree();
        assert!(
            (observed - target).abs() < 0.5,
            "target {target}, observed {observed}"
        );
    }
}

#[test]
fn mean_degree_tracks_target_with_removal() {
    let mut graph = Graph::new();
    let request = GenerateRequest {
        allow_remove: true,
        ..GenerateRequest::new(2000, 4.0).with_seed(5)
    };
    generate_graph(&mut graph, &request, &names()).unwrap();

    assert_eq!(graph.node_count(), 2002);
    assert!((graph.average_degree() - 4.0).abs() < 0.5);
}

#[test]
fn quantized_weights_are_roughly_uniform() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(2500, 4.0).with_weights().with_seed(31);
    generate_graph(&mut graph, &request, &names()).unwrap();

    let mut buckets = [0_usize; 10];
    for weight in weights(&graph) {
        buckets[weight as usize] += 1;
    }

    let total = graph.edge_count() as f64;
    for (value, count) in buckets.iter().enumerate() {
        let share = *count as f64 / total;
        assert!(
            (0.07..0.13).contains(&share),
            "weight {value} has share {share}"
        );
    }
}

#[test]
fn directed_run_marks_every_edge_directed() {
    let mut graph = Graph::new();
    let request = GenerateRequest {
        directed: true,
        ..GenerateRequest::new(100, 3.0).with_seed(12)
    };
    generate_graph(&mut graph, &request, &names()).unwrap();

    assert_eq!(graph.count_edges_where(|e| !e.directed), 0);
    assert!(graph.edges().any(|e| e.source_id > e.target_id));
}

#[test]
fn resumed_generator_extends_the_graph() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(20, 3.0).with_weights().with_seed(9);
    let mut generator = generate_graph(&mut graph, &request, &names()).unwrap();

    for _ in 0..10 {
        assert!(generator.next_events(&mut graph).unwrap());
    }
    assert_eq!(generator.steps(), 30);
    assert_eq!(graph.node_count(), 32);

    // New edges carry raw fractions until quantized again.
    assert!(graph.count_edges_where(|e| e.attribute_f64("weight").is_ok()) > 0);
    quantize_weights(&mut graph, "weight").unwrap();
    assert!(weights(&graph).iter().all(|w| (0..=9).contains(w)));
}

#[test]
fn custom_names_and_node_values() {
    let names = AttributeNames {
        weight: "cost".to_string(),
        distance: "hops".to_string(),
        node_value: Some("load".to_string()),
    };
    let mut graph = Graph::new();
    let request = GenerateRequest::new(30, 2.0).with_weights().with_seed(3);
    generate_graph(&mut graph, &request, &names).unwrap();
    reset_distances(&mut graph, &names);

    for node in graph.nodes() {
        assert_eq!(node.attribute_i64("hops"), Ok(UNSET_DISTANCE));
        let load = node.attribute_f64("load").unwrap();
        assert!((0.0..1.0).contains(&load));
        assert!(node.attribute("distance").is_none());
    }
    assert!(graph.edges().all(|e| e.attribute_i64("cost").is_ok()));
}

#[test]
fn injected_generator_is_driven_exactly() {
    struct Counting {
        inner: RandomGenerator,
        begun: usize,
        ended: usize,
    }

    impl Generator for Counting {
        fn begin<S: pathprep_core::GraphSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
            self.begun += 1;
            self.inner.begin(sink)
        }

        fn next_events<S: pathprep_core::GraphSink>(
            &mut self,
            sink: &mut S,
        ) -> Result<bool, S::Error> {
            self.inner.next_events(sink)
        }

        fn end<S: pathprep_core::GraphSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
            self.ended += 1;
            self.inner.end(sink)
        }
    }

    let counting = Counting {
        inner: RandomGenerator::from_seed(RandomOptions::default(), Some(6)),
        begun: 0,
        ended: 0,
    };
    let mut graph = Graph::new();
    let used = generate_graph_with(&mut graph, &GenerateRequest::new(15, 1.0), &names(), counting)
        .unwrap();

    assert_eq!(used.begun, 1);
    assert_eq!(used.ended, 1);
    assert_eq!(used.inner.steps(), 15);
}

#[test]
fn event_stream_replays_into_identical_graph() {
    let options = RandomOptions {
        average_degree: 3.0,
        allow_remove: true,
        edge_attribute: Some("weight".to_string()),
        ..Default::default()
    };

    let mut log: Vec<GraphEvent> = Vec::new();
    let mut recorder = RandomGenerator::from_seed(options.clone(), Some(40));
    recorder.begin(&mut log).unwrap();
    for _ in 0..60 {
        recorder.next_events(&mut log).unwrap();
    }

    let mut direct = Graph::new();
    let mut generator = RandomGenerator::from_seed(options, Some(40));
    generator.begin(&mut direct).unwrap();
    for _ in 0..60 {
        generator.next_events(&mut direct).unwrap();
    }

    let mut replayed = Graph::new();
    for event in &log {
        pathprep_core::GraphSink::apply(&mut replayed, event).unwrap();
    }

    assert_eq!(replayed, direct);
    assert_eq!(
        log.iter()
            .filter(|e| matches!(e, GraphEvent::StepBegins { .. }))
            .count(),
        60
    );
}

#[test]
fn second_synthesis_extends_the_same_graph() {
    let mut graph = Graph::new();
    let request = GenerateRequest::new(20, 3.0).with_weights().with_seed(14);
    generate_graph(&mut graph, &request, &names()).unwrap();
    let first = graph.clone();

    let generator = generate_graph(&mut graph, &request, &names()).unwrap();

    assert_eq!(generator.steps(), 20);
    assert_eq!(graph.node_count(), 22 + 22);
    assert!(graph.has_edge("22_23"));
    for node in first.nodes() {
        assert!(graph.has_node(&node.id));
    }
    for edge in first.edges() {
        assert_eq!(graph.edge(&edge.id), Some(edge));
    }
    assert!(weights(&graph).iter().all(|w| (0..=9).contains(w)));
}

#[test]
fn synthesis_into_populated_graph_keeps_existing_elements() {
    let mut graph = Graph::new();
    graph.add_node("1").unwrap().set_attribute("distance", 4_i64);
    graph.add_node("depot").unwrap();
    graph.add_node("5").unwrap();
    graph.add_edge("1_depot", "1", "depot", false).unwrap();
    graph.add_edge("link_5", "depot", "5", true).unwrap().set_attribute("weight", 0.42);
    let before = graph.clone();

    let request = GenerateRequest::new(10, 2.0).with_weights().with_seed(3);
    generate_graph(&mut graph, &request, &names()).unwrap();

    assert_eq!(graph.node_count(), 3 + 12);
    assert!(graph.has_edge("6_7"));
    assert_eq!(graph.node("1"), before.node("1"));
    assert_eq!(graph.node("depot"), before.node("depot"));
    assert_eq!(graph.edge("1_depot"), before.edge("1_depot"));
    assert!(graph.edge("1_depot").unwrap().attribute("weight").is_none());
    // Pre-existing fractional weights are quantized with the rest.
    assert_eq!(graph.edge("link_5").unwrap().attribute_i64("weight"), Ok(4));
}
