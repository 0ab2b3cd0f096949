use crate::drawing::Drawing;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::f64::consts::PI;

/// Smallest angle between two edges meeting at a node, relative to the ideal
/// `2π / max_degree`.
///
/// For every node and every pair of its incident edges the angle between the
/// edge vectors is folded into `[0, π/2]` via `min(angle, π - angle)`; the
/// global minimum is divided by `2π / max_degree`.
///
/// Fails when no node has two incident edges of non-zero length.
pub fn angular_resolution(graph: &Graph, drawing: &Drawing) -> Result<f64> {
    drawing.check(graph)?;
    let mut min_angle = f64::INFINITY;
    let mut neighbors = Vec::new();

    for node in graph.nodes() {
        neighbors.clear();
        neighbors.extend(graph.neighbors(node));
        let pj = drawing.position(node);

        for (i, &n1) in neighbors.iter().enumerate() {
            let e1 = drawing.position(n1) - pj;
            for &n2 in &neighbors[i + 1..] {
                let e2 = pj - drawing.position(n2);
                let norms = e1.length() * e2.length();
                if norms == 0.0 {
                    continue;
                }
                let angle = (e1.dot(e2) / norms).clamp(-1.0, 1.0).acos();
                min_angle = min_angle.min((PI - angle).min(angle));
            }
        }
    }

    if min_angle.is_infinite() {
        return Err(Error::Degenerate {
            metric: "angular_resolution",
            reason: "no node has two incident edges of non-zero length",
        });
    }

    let max_degree = graph.max_degree() as f64;
    Ok(min_angle / ((2.0 * PI) / max_degree))
}
