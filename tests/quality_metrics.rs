use glam::DVec2;
use layout_quality::metrics;
use layout_quality::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use std::collections::{BTreeSet, HashMap};

const EPS: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * (1.0 + a.abs().max(b.abs()))
}

fn four_cycle() -> Graph {
    Graph::from_edges(
        ["A", "B", "C", "D"],
        [("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "A", 1.0)],
    )
    .unwrap()
}

fn draw(graph: &Graph, points: &[(&str, (f64, f64))]) -> Drawing {
    let map: HashMap<&str, (f64, f64)> = points.iter().copied().collect();
    Drawing::from_map(graph, &map).unwrap()
}

/// A small connected graph with a hub, a cycle and a pendant path.
fn sample_graph() -> Graph {
    let json = r#"{
        "directed": false,
        "multigraph": false,
        "nodes": [{"id": 0}, {"id": 1}, {"id": 2}, {"id": 3}, {"id": 4},
                  {"id": 5}, {"id": 6}, {"id": 7}, {"id": 8}, {"id": 9}],
        "links": [
            {"source": 0, "target": 1}, {"source": 0, "target": 2},
            {"source": 0, "target": 3}, {"source": 1, "target": 2},
            {"source": 2, "target": 4}, {"source": 4, "target": 5},
            {"source": 5, "target": 6}, {"source": 6, "target": 4},
            {"source": 3, "target": 7}, {"source": 7, "target": 8},
            {"source": 8, "target": 9}
        ]
    }"#;
    let raw = RawGraph::from_node_link_json(json).unwrap();
    preprocess(&raw, EdgeWeight::default()).unwrap()
}

#[test]
fn metrics_are_deterministic() {
    let graph = sample_graph();
    let drawing = Drawing::random(&graph, &mut StdRng::seed_from_u64(11), 100.0);
    let evaluator = Evaluator::new();

    let first = evaluator.evaluate_all(&graph, &drawing).unwrap();
    let second = evaluator.evaluate_all(&graph, &drawing).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), MetricKind::ALL.len());
}

#[test]
fn uncrossed_drawing_scores_zero_on_crossing_metrics() {
    let graph = four_cycle();
    let drawing = draw(
        &graph,
        &[
            ("A", (0.0, 0.0)),
            ("B", (1.0, 0.0)),
            ("C", (1.0, 1.0)),
            ("D", (0.0, 1.0)),
        ],
    );
    let report = evaluate(
        &graph,
        &drawing,
        &["crossing_number", "crossing_angle"],
        None,
        None,
    )
    .unwrap();
    assert_eq!(report.get("crossing_number"), Some(0.0));
    assert_eq!(report.get("crossing_angle"), Some(0.0));
}

#[test]
fn bowtie_crosses_once_at_a_right_angle() {
    let graph = four_cycle();
    let drawing = draw(
        &graph,
        &[
            ("A", (0.0, 0.0)),
            ("B", (1.0, 1.0)),
            ("C", (1.0, 0.0)),
            ("D", (0.0, 1.0)),
        ],
    );
    let report = evaluate(
        &graph,
        &drawing,
        &["crossing_number", "crossing_angle"],
        None,
        None,
    )
    .unwrap();
    assert_eq!(report.get("crossing_number"), Some(1.0));
    assert!(approx_eq(report.get("crossing_angle").unwrap(), 0.0));

    let crossings = edge_crossing_finder(&graph, &drawing).unwrap();
    let (a, b) = crossings.iter().next().unwrap();
    let ids = |e| {
        let edge = graph.edge(e).unwrap();
        BTreeSet::from([graph.node_id(edge.source), graph.node_id(edge.target)])
    };
    assert_eq!(ids(a), BTreeSet::from(["A", "B"]));
    assert_eq!(ids(b), BTreeSet::from(["C", "D"]));
}

#[test]
fn shortest_paths_are_symmetric_with_zero_diagonal() {
    let json = r#"{
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}],
        "links": [
            {"source": "a", "target": "b", "weight": 2.0},
            {"source": "b", "target": "c", "weight": 0.5},
            {"source": "a", "target": "c", "weight": 3.0},
            {"source": "c", "target": "d", "weight": 1.5}
        ]
    }"#;
    let raw = RawGraph::from_node_link_json(json).unwrap();
    let graph = preprocess(&raw, EdgeWeight::Attribute { default: 1.0 }).unwrap();
    let table = all_pairs_shortest_path_length(&graph);

    for u in graph.nodes() {
        assert_eq!(table.get(u, u), Some(0.0));
        for v in graph.nodes() {
            assert_eq!(table.get(u, v), table.get(v, u));
        }
    }
    let (a, d) = (
        graph.node_index("a").unwrap(),
        graph.node_index("d").unwrap(),
    );
    assert_eq!(table.get(a, d), Some(4.0));
}

#[rstest]
#[case::shared_endpoint((0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0), false)]
#[case::proper_cross((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0), true)]
#[case::disjoint((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), false)]
fn crossing_predicate_is_symmetric(
    #[case] p1: (f64, f64),
    #[case] p2: (f64, f64),
    #[case] p3: (f64, f64),
    #[case] p4: (f64, f64),
    #[case] expected: bool,
) {
    let [p1, p2, p3, p4] = [p1, p2, p3, p4].map(|(x, y)| DVec2::new(x, y));
    let forward = layout_quality::primitives::is_edge_crossing(p1, p2, p3, p4);
    let backward = layout_quality::primitives::is_edge_crossing(p3, p4, p1, p2);
    assert_eq!(forward, expected);
    assert_eq!(backward, expected);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn bounded_metrics_stay_in_range(#[case] seed: u64) {
    let graph = sample_graph();
    let drawing = Drawing::random(&graph, &mut StdRng::seed_from_u64(seed), 50.0);

    let gabriel = metrics::gabriel_graph_property(&graph, &drawing).unwrap();
    let resolution = metrics::node_resolution(&drawing).unwrap();
    let shape = metrics::shape_based_metrics(&graph, &drawing).unwrap();

    assert!((0.0..=1.0).contains(&gabriel));
    assert!(resolution > 0.0 && resolution <= 1.0);
    assert!((0.0..=1.0).contains(&shape));
}

#[test]
fn unit_square_node_resolution_is_one() {
    let graph = four_cycle();
    let drawing = draw(
        &graph,
        &[
            ("A", (0.0, 0.0)),
            ("B", (1.0, 0.0)),
            ("C", (1.0, 1.0)),
            ("D", (0.0, 1.0)),
        ],
    );
    let report = evaluate(&graph, &drawing, &["node_resolution"], None, None).unwrap();
    assert_eq!(report.get("node_resolution"), Some(1.0));
}

#[test]
fn collinear_path_has_zero_stress() {
    let nodes: Vec<String> = (0..8).map(|i| format!("n{i}")).collect();
    let edges: Vec<(String, String, f64)> = (1..8)
        .map(|i| (format!("n{}", i - 1), format!("n{i}"), 1.0))
        .collect();
    let graph = Graph::from_edges(nodes, edges).unwrap();
    let positions: HashMap<String, (f64, f64)> = (0..8)
        .map(|i| (format!("n{i}"), (i as f64, 0.0)))
        .collect();
    let drawing = Drawing::from_map(&graph, &positions).unwrap();

    let report = evaluate(&graph, &drawing, &["stress"], None, None).unwrap();
    assert!(approx_eq(report.get("stress").unwrap(), 0.0));
}

#[test]
fn weighted_edge_at_its_length_is_ideal() {
    let graph = Graph::from_edges(["u", "v"], [("u", "v", 5.0)]).unwrap();
    let drawing = draw(&graph, &[("u", (1.0, 1.0)), ("v", (4.0, 5.0))]);
    let report = evaluate(&graph, &drawing, &["ideal_edge_length"], None, None).unwrap();
    assert_eq!(report.get("ideal_edge_length"), Some(0.0));
}

#[rstest]
#[case(&["stress", "aspect_ratio"])]
#[case(&["aspect_ratio", "stress", "aspect_ratio", "stress"])]
#[case(&["shape_based_metrics", "gabriel_graph_property", "angular_resolution", "crossing_angle"])]
fn report_keys_are_the_requested_set(#[case] names: &[&str]) {
    let graph = sample_graph();
    let drawing = Drawing::random(&graph, &mut StdRng::seed_from_u64(5), 20.0);
    let report = evaluate(&graph, &drawing, names, None, None).unwrap();

    let keys: BTreeSet<&str> = report.iter().map(|(name, _)| name).collect();
    let requested: BTreeSet<&str> = names.iter().copied().collect();
    assert_eq!(keys, requested);
}

#[test]
fn unknown_metric_names_are_rejected() {
    let graph = four_cycle();
    let drawing = Drawing::random(&graph, &mut StdRng::seed_from_u64(0), 1.0);
    let err = evaluate(&graph, &drawing, &["stress", "symmetry"], None, None).unwrap_err();
    assert!(matches!(err, Error::UnknownMetric { ref name } if name == "symmetry"));
    assert!(err.to_string().contains("symmetry"));
}

#[test]
fn batch_evaluation_matches_single_evaluation() {
    let graph = sample_graph();
    let mut rng = StdRng::seed_from_u64(99);
    let drawings: Vec<Drawing> = (0..6)
        .map(|_| Drawing::random(&graph, &mut rng, 30.0))
        .collect();
    let names = ["stress", "crossing_number", "node_resolution"];
    let evaluator = Evaluator::new();

    let batch = evaluator.evaluate_many(&graph, &drawings, &names).unwrap();
    assert_eq!(batch.len(), drawings.len());
    for (drawing, report) in drawings.iter().zip(&batch) {
        let single = evaluator.evaluate(&graph, drawing, &names, None, None).unwrap();
        assert_eq!(&single, report);
    }

    let mean = QualityReport::mean(&batch);
    let expected: f64 = batch
        .iter()
        .map(|r| r.get("crossing_number").unwrap())
        .sum::<f64>()
        / batch.len() as f64;
    assert!(approx_eq(mean.get("crossing_number").unwrap(), expected));
}

#[test]
fn layout_run_is_timed() {
    let graph = sample_graph();
    let layout = |graph: &Graph, seed: u64| -> Result<Drawing> {
        Ok(Drawing::random(graph, &mut StdRng::seed_from_u64(seed), 10.0))
    };
    let (drawing, report) = Evaluator::new()
        .draw_and_evaluate(&layout, &graph, 3, &[RUN_TIME, "stress"], None)
        .unwrap();
    assert_eq!(drawing.len(), graph.node_count());
    assert!(report.get(RUN_TIME).unwrap() >= 0.0);
    assert!(report.get("stress").unwrap() >= 0.0);
}

#[test]
fn run_time_requires_start_and_end() {
    let mut timer = RunTime::new();
    assert!(matches!(timer.quality(), Err(Error::RunTimeNotMeasured)));
    timer.end();
    assert!(matches!(timer.quality(), Err(Error::RunTimeNotMeasured)));
}

#[test]
fn registry_directions() {
    let minimized: BTreeSet<&str> = METRICS
        .iter()
        .filter(|d| d.direction == Direction::Minimize)
        .map(|d| d.name)
        .collect();
    assert_eq!(
        minimized,
        BTreeSet::from(["crossing_angle", "crossing_number", "ideal_edge_length", "stress"])
    );
}

#[test]
fn every_reported_name_has_a_direction() {
    let graph = sample_graph();
    let layout = |graph: &Graph, seed: u64| -> Result<Drawing> {
        Ok(Drawing::random(graph, &mut StdRng::seed_from_u64(seed), 10.0))
    };
    let mut names: Vec<&str> = METRICS.iter().map(|d| d.name).collect();
    names.push(RUN_TIME);
    let (_, report) = Evaluator::new()
        .draw_and_evaluate(&layout, &graph, 1, &names, None)
        .unwrap();
    for (name, _) in report.iter() {
        assert!(direction_of(name).is_ok(), "{name}");
    }
    assert_eq!(direction_of(RUN_TIME).unwrap(), RUN_TIME_DESCRIPTOR.direction);
}
