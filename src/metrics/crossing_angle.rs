use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use crate::primitives::EdgeCrossings;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

/// Deviation of the worst crossing from a right angle, normalized to `[0, 1]`.
///
/// Each crossing scores `max(|π - θ - π/2|, |θ - π/2|) / (π/2)` where `θ` is
/// the angle between the two edge vectors. The metric is the maximum over all
/// crossings; a drawing without crossings scores 0.
pub fn crossing_angle(
    graph: &Graph,
    drawing: &Drawing,
    crossings: &EdgeCrossings,
) -> Result<f64> {
    drawing.check(graph)?;
    let direction = |id| -> Option<DVec2> {
        let edge = graph.edge(id)?;
        Some(drawing.position(edge.source) - drawing.position(edge.target))
    };

    let mut q: f64 = 0.0;
    for (id1, id2) in crossings.iter() {
        let (Some(e1), Some(e2)) = (direction(id1), direction(id2)) else {
            continue;
        };
        let cos = (e1.dot(e2) / (e1.length() * e2.length())).clamp(-1.0, 1.0);
        let angle = cos.acos();
        let q_c = (PI - angle - FRAC_PI_2).abs().max((angle - FRAC_PI_2).abs()) / FRAC_PI_2;
        q = q.max(q_c);
    }
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::tests::{four_cycle, path};

    fn drawing(graph: &Graph, positions: [(f64, f64); 4]) -> Drawing {
        Drawing::from_positions(
            graph,
            positions.iter().map(|&(x, y)| DVec2::new(x, y)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn right_angle_crossing_scores_zero() {
        let graph = four_cycle();
        // Bow-tie with perpendicular diagonals AB and CD.
        let drawing = drawing(&graph, [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        let crossings = EdgeCrossings::find(&graph, &drawing).unwrap();
        assert_eq!(crossings.len(), 1);
        assert!(crossing_angle(&graph, &drawing, &crossings).unwrap().abs() < 1e-12);
    }

    #[test]
    fn shallow_crossing_scores_high() {
        let graph = four_cycle();
        // AB and CD cross at a 2·atan(0.1) angle.
        let drawing = drawing(&graph, [(0.0, 0.0), (10.0, 1.0), (10.0, 0.0), (0.0, 1.0)]);
        let crossings = EdgeCrossings::find(&graph, &drawing).unwrap();
        assert_eq!(crossings.len(), 1);

        let theta = 2.0 * 0.1f64.atan();
        let expected = (theta - FRAC_PI_2).abs() / FRAC_PI_2;
        let q = crossing_angle(&graph, &drawing, &crossings).unwrap();
        assert!((q - expected).abs() < 1e-9);
        assert!(q > 0.8 && q <= 1.0);
    }

    #[test]
    fn no_crossings_scores_zero() {
        let graph = four_cycle();
        let drawing = drawing(&graph, [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let crossings = EdgeCrossings::find(&graph, &drawing).unwrap();
        assert_eq!(crossing_angle(&graph, &drawing, &crossings).unwrap(), 0.0);
    }

    #[test]
    fn drawing_of_another_graph_is_rejected() {
        let graph = four_cycle();
        let drawing = drawing(&graph, [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        let crossings = EdgeCrossings::find(&graph, &drawing).unwrap();
        assert!(matches!(
            crossing_angle(&path(6), &drawing, &crossings),
            Err(Error::PositionCount { .. })
        ));
    }
}
