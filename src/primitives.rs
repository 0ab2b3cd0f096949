//! Geometry and graph-distance building blocks shared by several metrics.

pub mod convex_hull;
pub mod edge_crossing;
pub mod shortest_path;

pub use convex_hull::convex_hull;
pub use edge_crossing::{edge_crossing_finder, is_edge_crossing, EdgeCrossings};
pub use shortest_path::{all_pairs_shortest_path_length, ShortestPathTable};

use glam::DVec2;

/// Mean of `points`, or `None` when there are none.
pub fn gravity_center(points: &[DVec2]) -> Option<DVec2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(DVec2::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}
