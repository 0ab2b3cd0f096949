use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use crate::primitives::ShortestPathTable;

/// Sum over edges of the squared relative error between drawn length and
/// graph distance: `Σ ((|p_i - p_j| - d_ij) / d_ij)²`.
pub fn ideal_edge_length(
    graph: &Graph,
    drawing: &Drawing,
    shortest_paths: &ShortestPathTable,
) -> Result<f64> {
    drawing.check(graph)?;
    let mut s = 0.0;
    for edge in graph.edges() {
        let lij = shortest_paths.distance(graph, edge.source, edge.target)?;
        let dist = (drawing.position(edge.source) - drawing.position(edge.target)).length();
        s += ((dist - lij) / lij).powi(2);
    }
    Ok(s)
}
