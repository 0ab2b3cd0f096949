use crate::error::{Error, Result};
use crate::graph::Graph;
use log::debug;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;

/// Graph-theoretic distance between every pair of nodes.
///
/// Stored as a dense row-major `n × n` matrix. The table is symmetric and its
/// diagonal is zero; pairs without a path hold `f64::INFINITY` and are
/// reported as errors by [`ShortestPathTable::distance`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathTable {
    n: usize,
    dist: Vec<f64>,
}

impl ShortestPathTable {
    /// Runs Dijkstra from every node over the edge weights.
    pub fn new(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n * n];

        for source in graph.nodes() {
            let lengths = dijkstra(graph.inner(), source, None, |e| e.weight().weight);
            let row = &mut dist[source.index() * n..(source.index() + 1) * n];
            for (target, length) in lengths {
                row[target.index()] = length;
            }
        }

        // Sums along a path can differ in the last bit depending on which end
        // Dijkstra starts from; keep the smaller one for both directions.
        for u in 0..n {
            dist[u * n + u] = 0.0;
            for v in u + 1..n {
                let d = dist[u * n + v].min(dist[v * n + u]);
                dist[u * n + v] = d;
                dist[v * n + u] = d;
            }
        }

        debug!("computed all-pairs shortest paths for {n} nodes");
        Self { n, dist }
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Raw lookup; `None` if either node is out of range or unreachable.
    pub fn get(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        let (u, v) = (u.index(), v.index());
        if u >= self.n || v >= self.n {
            return None;
        }
        Some(self.dist[u * self.n + v]).filter(|d| d.is_finite())
    }

    /// Distance between `u` and `v`, failing loudly when no path exists.
    pub fn distance(&self, graph: &Graph, u: NodeIndex, v: NodeIndex) -> Result<f64> {
        self.get(u, v).ok_or_else(|| Error::MissingShortestPath {
            u: graph.node_id(u).to_owned(),
            v: graph.node_id(v).to_owned(),
        })
    }
}

/// All-pairs shortest path lengths over edge weights.
pub fn all_pairs_shortest_path_length(graph: &Graph) -> ShortestPathTable {
    ShortestPathTable::new(graph)
}
