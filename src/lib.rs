//! # Example
//! ```no_run
//!use layout_quality::prelude::*;
//!use rand::SeedableRng;
//!
//!let graph = load_graph("dataset/bull.json", EdgeWeight::default()).unwrap();
//!
//!let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//!let drawing = Drawing::random(&graph, &mut rng, 100.0);
//!
//!let evaluator = Evaluator::builder()
//!    .stress_l(30.0)
//!    .aspect_ratio_rotations(7)
//!    .build();
//!
//!let report = evaluator
//!    .evaluate(&graph, &drawing, &["stress", "crossing_number"], None, None)
//!    .unwrap();
//!println!("{}", serde_json::to_string(&report).unwrap());
//! ```

pub mod drawing;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod layout;
pub mod metrics;
pub mod primitives;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::drawing::Drawing;
    pub use crate::error::{Error, Result};
    pub use crate::evaluator::{evaluate, Evaluator, EvaluatorBuilder, QualityReport};
    pub use crate::graph::{load_graph, preprocess, EdgeWeight, Graph, RawGraph};
    pub use crate::layout::{Layout, SgdParams};
    pub use crate::metrics::{
        direction_of, AuxiliaryDescriptor, Direction, MetricKind, RunTime, METRICS, RUN_TIME,
        RUN_TIME_DESCRIPTOR,
    };
    pub use crate::primitives::{
        all_pairs_shortest_path_length, edge_crossing_finder, EdgeCrossings, ShortestPathTable,
    };
}
