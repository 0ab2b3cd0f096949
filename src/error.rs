//! Errors raised while building graphs, drawings, and scoring them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown quality metric `{name}`")]
    UnknownMetric { name: String },

    #[error("node `{id}` is not part of the graph")]
    UnknownNode { id: String },

    #[error("node `{id}` appears more than once")]
    DuplicateNode { id: String },

    #[error("self-loop on node `{id}`")]
    SelfLoop { id: String },

    #[error("edge `{u}`-`{v}` appears more than once")]
    DuplicateEdge { u: String, v: String },

    #[error("edge `{u}`-`{v}` has weight {weight}, expected a finite value above 0")]
    InvalidWeight {
        u: String,
        v: String,
        weight: f64,
    },

    #[error("graph is not connected")]
    Disconnected,

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("drawing has no position for node `{id}`")]
    MissingPosition { id: String },

    #[error("drawing has {found} positions, graph has {expected} nodes")]
    PositionCount { expected: usize, found: usize },

    #[error("position of node `{id}` is not finite")]
    NonFinitePosition { id: String },

    #[error("no shortest path between `{u}` and `{v}`")]
    MissingShortestPath { u: String, v: String },

    #[error("{metric} is undefined for this drawing: {reason}")]
    Degenerate {
        metric: &'static str,
        reason: &'static str,
    },

    #[error("delaunay triangulation failed: {reason}")]
    Triangulation { reason: String },

    #[error("run time queried before both start and end were recorded")]
    RunTimeNotMeasured,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
