use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use rstar::primitives::GeomWithData;
use rstar::RTree;

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// How far nodes stay out of the circles spanned by edges.
///
/// Every edge `(i, j)` defines the circle with diameter `|p_i - p_j|` around
/// the edge midpoint. For each edge the node closest to the midpoint, other
/// than `i` and `j`, gives the ratio `distance / radius`; the metric is the
/// smallest ratio, clamped to at most 1. Zero-length edges are skipped.
///
/// The closest node is found with an R-tree nearest-neighbour walk, giving
/// the same value as scanning every node.
pub fn gabriel_graph_property(graph: &Graph, drawing: &Drawing) -> Result<f64> {
    drawing.check(graph)?;
    let points: Vec<IndexedPoint> = graph
        .nodes()
        .map(|n| GeomWithData::new(drawing.position(n).to_array(), n.index()))
        .collect();
    let tree = RTree::bulk_load(points);

    let mut q = f64::INFINITY;
    for edge in graph.edges() {
        let xi = drawing.position(edge.source);
        let xj = drawing.position(edge.target);

        let center = (xi + xj) / 2.0;
        let radius = (xi - xj).length() / 2.0;
        if radius == 0.0 {
            continue;
        }

        let (source, target) = (edge.source.index(), edge.target.index());
        let nearest = tree
            .nearest_neighbor_iter(&center.to_array())
            .find(|p| p.data != source && p.data != target);
        if let Some(p) = nearest {
            let [x, y] = *p.geom();
            let distance = ((x - center.x).powi(2) + (y - center.y).powi(2)).sqrt();
            q = q.min(distance / radius);
        }
    }

    Ok(q.min(1.0))
}
