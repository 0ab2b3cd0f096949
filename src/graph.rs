//! The undirected, connected, weighted graph every metric is evaluated on.

mod node_link;
mod preprocess;

pub use node_link::{load_graph, RawGraph, RawLink};
pub use preprocess::{preprocess, EdgeWeight};

use crate::error::{Error, Result};
use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// Weight carried by every edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeData {
    pub weight: f64,
}

/// One edge of a [`Graph`], resolved to its endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Dense edge id in `0..edge_count`.
    pub id: EdgeIndex,
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: f64,
}

/// Undirected graph with string node ids and dense integer node and edge ids.
///
/// A `Graph` is always non-empty, connected, and free of self-loops and
/// parallel edges. Node `i` is the `i`-th node passed at construction and
/// edge `k` the `k`-th edge, so ids stay stable for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct Graph {
    inner: UnGraph<String, EdgeData>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    /// Builds a graph from node ids and `(source, target, weight)` triples.
    ///
    /// Edges may only reference listed nodes. Fails on duplicate nodes or
    /// edges, self-loops, weights that are not finite and positive, and
    /// disconnected input.
    pub fn from_edges<N, E, S>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        E: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut inner = UnGraph::default();
        let mut index = HashMap::new();

        for id in nodes {
            let id: String = id.into();
            if index.contains_key(&id) {
                return Err(Error::DuplicateNode { id });
            }
            let node = inner.add_node(id.clone());
            index.insert(id, node);
        }
        if inner.node_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        let mut seen = HashSet::new();
        for (u, v, weight) in edges {
            let (u, v) = (u.as_ref(), v.as_ref());
            let a = *index
                .get(u)
                .ok_or_else(|| Error::UnknownNode { id: u.to_owned() })?;
            let b = *index
                .get(v)
                .ok_or_else(|| Error::UnknownNode { id: v.to_owned() })?;
            if a == b {
                return Err(Error::SelfLoop { id: u.to_owned() });
            }
            if !(weight.is_finite() && weight > 0.0) {
                return Err(Error::InvalidWeight {
                    u: u.to_owned(),
                    v: v.to_owned(),
                    weight,
                });
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(Error::DuplicateEdge {
                    u: u.to_owned(),
                    v: v.to_owned(),
                });
            }
            inner.add_edge(a, b, EdgeData { weight });
        }

        if connected_components(&inner) != 1 {
            return Err(Error::Disconnected);
        }

        Ok(Self { inner, index })
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Node indices in construction order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.node_indices()
    }

    /// Edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.edge_references().map(|e| Edge {
            id: e.id(),
            source: e.source(),
            target: e.target(),
            weight: e.weight().weight,
        })
    }

    pub fn edge(&self, id: EdgeIndex) -> Option<Edge> {
        let (source, target) = self.inner.edge_endpoints(id)?;
        let weight = self.inner.edge_weight(id)?.weight;
        Some(Edge {
            id,
            source,
            target,
            weight,
        })
    }

    /// The string id of `node`.
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn node_id(&self, node: NodeIndex) -> &str {
        &self.inner[node]
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.neighbors(node)
    }

    pub fn degree(&self, node: NodeIndex) -> usize {
        self.inner.neighbors(node).count()
    }

    pub fn max_degree(&self) -> usize {
        self.nodes().map(|n| self.degree(n)).max().unwrap_or(0)
    }

    /// The underlying petgraph graph, for running petgraph algorithms directly.
    pub fn inner(&self) -> &UnGraph<String, EdgeData> {
        &self.inner
    }
}
