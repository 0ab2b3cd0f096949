use crate::drawing::Drawing;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::primitives::{convex_hull, gravity_center};
use glam::DVec2;
use std::f64::consts::PI;

/// Worst bounding-box aspect ratio over `rotations` orientations.
///
/// Points are centred on their gravity center and reduced to their convex
/// hull. For `k` in `0..rotations` the hull is rotated by `2πk / rotations`
/// and the ratio `min(w, h) / max(w, h)` of its axis-aligned bounding box is
/// taken; the metric is the smallest such ratio, starting from 1.
///
/// Fails when the drawing has no area (fewer than three hull vertices).
pub fn aspect_ratio(graph: &Graph, drawing: &Drawing, rotations: usize) -> Result<f64> {
    drawing.check(graph)?;
    let points: Vec<DVec2> = graph.nodes().map(|n| drawing.position(n)).collect();
    let center = gravity_center(&points).ok_or(Error::EmptyGraph)?;
    let centered: Vec<DVec2> = points.iter().map(|&p| p - center).collect();

    let hull = convex_hull(&centered);
    if hull.len() < 3 {
        return Err(Error::Degenerate {
            metric: "aspect_ratio",
            reason: "node positions are collinear or coincide",
        });
    }

    let mut q: f64 = 1.0;
    for k in 0..rotations {
        let theta = (2.0 * PI * k as f64) / rotations as f64;
        let (s, c) = theta.sin_cos();

        let mut min = DVec2::INFINITY;
        let mut max = DVec2::NEG_INFINITY;
        for p in &hull {
            let r = DVec2::new(p.x * c - p.y * s, p.x * s + p.y * c);
            min = min.min(r);
            max = max.max(r);
        }

        let size = max - min;
        let (w, h) = (size.x, size.y);
        q = q.min(w.min(h) / w.max(h));
    }

    Ok(q)
}
