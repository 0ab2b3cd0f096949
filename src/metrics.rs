//! Quality metrics and the static registry the evaluator dispatches through.
//!
//! Every metric is a pure function of a graph, a drawing and, for some, the
//! shortest-path table or the crossing set. The registry pairs each function
//! with its name and the direction an optimizer should push it.

pub mod angular_resolution;
pub mod aspect_ratio;
pub mod crossing_angle;
pub mod crossing_number;
pub mod gabriel_graph_property;
pub mod ideal_edge_length;
pub mod node_resolution;
pub mod run_time;
pub mod shape_based_metrics;
pub mod stress;

pub use angular_resolution::angular_resolution;
pub use aspect_ratio::aspect_ratio;
pub use crossing_angle::crossing_angle;
pub use crossing_number::crossing_number;
pub use gabriel_graph_property::gabriel_graph_property;
pub use ideal_edge_length::ideal_edge_length;
pub use node_resolution::node_resolution;
pub use run_time::RunTime;
pub use shape_based_metrics::shape_based_metrics;
pub use stress::stress;

use crate::drawing::Drawing;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::primitives::{EdgeCrossings, ShortestPathTable};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Which way a metric should be optimized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Whether score `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Self::Maximize => a > b,
            Self::Minimize => a < b,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Maximize => "maximize",
            Self::Minimize => "minimize",
        })
    }
}

/// Tunable constants of the metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricParams {
    pub stress_k: f64,
    pub stress_l: f64,
    pub aspect_ratio_rotations: usize,
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            stress_k: 1.0,
            stress_l: 1.0,
            aspect_ratio_rotations: 7,
        }
    }
}

/// Everything a metric may read. Shared artefacts are optional; metrics that
/// need a missing one compute it themselves.
#[derive(Clone, Copy)]
pub struct MetricInput<'a> {
    pub graph: &'a Graph,
    pub drawing: &'a Drawing,
    pub shortest_paths: Option<&'a ShortestPathTable>,
    pub crossings: Option<&'a EdgeCrossings>,
    pub params: &'a MetricParams,
}

impl<'a> MetricInput<'a> {
    fn resolve_shortest_paths(&self) -> Cow<'a, ShortestPathTable> {
        match self.shortest_paths {
            Some(table) => Cow::Borrowed(table),
            None => Cow::Owned(ShortestPathTable::new(self.graph)),
        }
    }

    fn resolve_crossings(&self) -> Result<Cow<'a, EdgeCrossings>> {
        Ok(match self.crossings {
            Some(crossings) => Cow::Borrowed(crossings),
            None => Cow::Owned(EdgeCrossings::find(self.graph, self.drawing)?),
        })
    }
}

/// Shared artefacts a metric consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Needs {
    pub shortest_paths: bool,
    pub crossings: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    AngularResolution,
    AspectRatio,
    CrossingAngle,
    CrossingNumber,
    GabrielGraphProperty,
    IdealEdgeLength,
    NodeResolution,
    ShapeBasedMetrics,
    Stress,
}

impl MetricKind {
    pub const ALL: [MetricKind; 9] = [
        Self::AngularResolution,
        Self::AspectRatio,
        Self::CrossingAngle,
        Self::CrossingNumber,
        Self::GabrielGraphProperty,
        Self::IdealEdgeLength,
        Self::NodeResolution,
        Self::ShapeBasedMetrics,
        Self::Stress,
    ];

    pub fn descriptor(self) -> &'static MetricDescriptor {
        &METRICS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn direction(self) -> Direction {
        self.descriptor().direction
    }

    pub fn from_name(name: &str) -> Result<Self> {
        METRICS
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.kind)
            .ok_or_else(|| Error::UnknownMetric {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registry entry.
pub struct MetricDescriptor {
    pub name: &'static str,
    pub kind: MetricKind,
    pub direction: Direction,
    pub needs: Needs,
    pub compute: fn(&MetricInput<'_>) -> Result<f64>,
}

impl fmt::Debug for MetricDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricDescriptor")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("needs", &self.needs)
            .finish_non_exhaustive()
    }
}

const NEEDS_NOTHING: Needs = Needs {
    shortest_paths: false,
    crossings: false,
};
const NEEDS_SHORTEST_PATHS: Needs = Needs {
    shortest_paths: true,
    crossings: false,
};
const NEEDS_CROSSINGS: Needs = Needs {
    shortest_paths: false,
    crossings: true,
};

/// All geometric metrics, sorted by name and indexed by [`MetricKind`].
pub static METRICS: [MetricDescriptor; 9] = [
    MetricDescriptor {
        name: "angular_resolution",
        kind: MetricKind::AngularResolution,
        direction: Direction::Maximize,
        needs: NEEDS_NOTHING,
        compute: |input| angular_resolution(input.graph, input.drawing),
    },
    MetricDescriptor {
        name: "aspect_ratio",
        kind: MetricKind::AspectRatio,
        direction: Direction::Maximize,
        needs: NEEDS_NOTHING,
        compute: |input| {
            aspect_ratio(
                input.graph,
                input.drawing,
                input.params.aspect_ratio_rotations,
            )
        },
    },
    MetricDescriptor {
        name: "crossing_angle",
        kind: MetricKind::CrossingAngle,
        direction: Direction::Minimize,
        needs: NEEDS_CROSSINGS,
        compute: |input| {
            crossing_angle(
                input.graph,
                input.drawing,
                &*input.resolve_crossings()?,
            )
        },
    },
    MetricDescriptor {
        name: "crossing_number",
        kind: MetricKind::CrossingNumber,
        direction: Direction::Minimize,
        needs: NEEDS_CROSSINGS,
        compute: |input| Ok(crossing_number(&*input.resolve_crossings()?)),
    },
    MetricDescriptor {
        name: "gabriel_graph_property",
        kind: MetricKind::GabrielGraphProperty,
        direction: Direction::Maximize,
        needs: NEEDS_NOTHING,
        compute: |input| gabriel_graph_property(input.graph, input.drawing),
    },
    MetricDescriptor {
        name: "ideal_edge_length",
        kind: MetricKind::IdealEdgeLength,
        direction: Direction::Minimize,
        needs: NEEDS_SHORTEST_PATHS,
        compute: |input| {
            ideal_edge_length(
                input.graph,
                input.drawing,
                &input.resolve_shortest_paths(),
            )
        },
    },
    MetricDescriptor {
        name: "node_resolution",
        kind: MetricKind::NodeResolution,
        direction: Direction::Maximize,
        needs: NEEDS_NOTHING,
        compute: |input| node_resolution(input.drawing),
    },
    MetricDescriptor {
        name: "shape_based_metrics",
        kind: MetricKind::ShapeBasedMetrics,
        direction: Direction::Maximize,
        needs: NEEDS_NOTHING,
        compute: |input| shape_based_metrics(input.graph, input.drawing),
    },
    MetricDescriptor {
        name: "stress",
        kind: MetricKind::Stress,
        direction: Direction::Minimize,
        needs: NEEDS_SHORTEST_PATHS,
        compute: |input| {
            stress(
                input.graph,
                input.drawing,
                &input.resolve_shortest_paths(),
                input.params.stress_k,
                input.params.stress_l,
            )
        },
    },
];

/// Name of the layout timing measurement, which lives outside [`METRICS`].
pub const RUN_TIME: &str = "run_time";

/// A measurement reported next to the metrics but not computed from a drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuxiliaryDescriptor {
    pub name: &'static str,
    pub direction: Direction,
}

pub const RUN_TIME_DESCRIPTOR: AuxiliaryDescriptor = AuxiliaryDescriptor {
    name: RUN_TIME,
    direction: Direction::Minimize,
};

/// Optimization direction of any name a report may carry.
pub fn direction_of(name: &str) -> Result<Direction> {
    if name == RUN_TIME_DESCRIPTOR.name {
        return Ok(RUN_TIME_DESCRIPTOR.direction);
    }
    MetricKind::from_name(name).map(MetricKind::direction)
}
