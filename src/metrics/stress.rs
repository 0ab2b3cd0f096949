use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use crate::primitives::ShortestPathTable;

/// Weighted stress of a drawing.
///
/// `Σ_{i<j} (K / d_ij²) · (|p_i - p_j| - L·d_ij)² / 2`, with `d_ij` the graph
/// distance. Evaluated, not minimized.
pub fn stress(
    graph: &Graph,
    drawing: &Drawing,
    shortest_paths: &ShortestPathTable,
    k: f64,
    l: f64,
) -> Result<f64> {
    drawing.check(graph)?;
    let nodes: Vec<_> = graph.nodes().collect();
    let mut s = 0.0;
    for (i, &u) in nodes.iter().enumerate() {
        let pu = drawing.position(u);
        for &v in &nodes[i + 1..] {
            let d = shortest_paths.distance(graph, u, v)?;
            let dx = (pu - drawing.position(v)).length();
            s += ((k / (d * d)) * (dx - l * d).powi(2)) / 2.0;
        }
    }
    Ok(s)
}
