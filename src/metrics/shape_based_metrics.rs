use crate::drawing::Drawing;
use crate::error::{Error, Result};
use crate::graph::Graph;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashSet;

/// Mean Jaccard similarity between each node's graph neighbourhood and its
/// neighbourhood in the Delaunay triangulation of the drawing.
///
/// Nodes drawn on the same spot share one triangulation vertex, which belongs
/// to the first of them; the others have no triangulation neighbours.
///
/// Fails when the drawing spans no triangle.
pub fn shape_based_metrics(graph: &Graph, drawing: &Drawing) -> Result<f64> {
    let shape = delaunay_neighbors(graph, drawing)?;

    let mut sum = 0.0;
    for node in graph.nodes() {
        let graph_neighbors: HashSet<usize> = graph.neighbors(node).map(|n| n.index()).collect();
        let shape_neighbors = &shape[node.index()];

        let union = graph_neighbors.union(shape_neighbors).count();
        if union == 0 {
            return Err(Error::Degenerate {
                metric: "shape_based_metrics",
                reason: "a node has no neighbours in either graph",
            });
        }
        let intersection = graph_neighbors.intersection(shape_neighbors).count();
        sum += intersection as f64 / union as f64;
    }

    Ok(sum / graph.node_count() as f64)
}

/// Neighbour sets of the Delaunay triangulation graph, indexed by node.
pub fn delaunay_neighbors(graph: &Graph, drawing: &Drawing) -> Result<Vec<HashSet<usize>>> {
    drawing.check(graph)?;
    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    let mut vertex_of = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let p = drawing.position(node);
        let handle = triangulation
            .insert(Point2::new(p.x, p.y))
            .map_err(|err| Error::Triangulation {
                reason: format!("{err:?}"),
            })?;
        vertex_of.push(handle.index());
    }

    if triangulation.num_inner_faces() == 0 {
        return Err(Error::Degenerate {
            metric: "shape_based_metrics",
            reason: "node positions are collinear or coincide",
        });
    }

    let mut node_at: Vec<Option<usize>> = vec![None; triangulation.num_vertices()];
    for (node, &vertex) in vertex_of.iter().enumerate() {
        node_at[vertex].get_or_insert(node);
    }

    let mut neighbors = vec![HashSet::new(); graph.node_count()];
    for edge in triangulation.undirected_edges() {
        let [a, b] = edge.vertices();
        if let (Some(u), Some(v)) = (node_at[a.fix().index()], node_at[b.fix().index()]) {
            neighbors[u].insert(v);
            neighbors[v].insert(u);
        }
    }
    Ok(neighbors)
}
