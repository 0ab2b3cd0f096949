//! Node placements produced by a layout.

use crate::error::{Error, Result};
use crate::graph::Graph;
use glam::DVec2;
use petgraph::graph::NodeIndex;
use rand::Rng;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A 2D position for every node of a [`Graph`], indexed by node index.
///
/// Metrics only read drawings. A drawing carries no reference to its graph;
/// pairing it with a graph of a different size is caught at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    positions: Vec<DVec2>,
}

impl Drawing {
    /// Wraps positions given in node index order.
    pub fn from_positions(graph: &Graph, positions: Vec<DVec2>) -> Result<Self> {
        if positions.len() != graph.node_count() {
            return Err(Error::PositionCount {
                expected: graph.node_count(),
                found: positions.len(),
            });
        }
        if let Some(node) = graph.nodes().find(|n| !positions[n.index()].is_finite()) {
            return Err(Error::NonFinitePosition {
                id: graph.node_id(node).to_owned(),
            });
        }
        Ok(Self { positions })
    }

    /// Builds a drawing from a `node id -> (x, y)` map, the shape layout
    /// engines hand back. Extra ids in the map are ignored.
    pub fn from_map<K>(graph: &Graph, map: &HashMap<K, (f64, f64)>) -> Result<Self>
    where
        K: Borrow<str> + Hash + Eq,
    {
        let positions = graph
            .nodes()
            .map(|node| {
                let id = graph.node_id(node);
                map.get(id)
                    .map(|&(x, y)| DVec2::new(x, y))
                    .ok_or_else(|| Error::MissingPosition { id: id.to_owned() })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_positions(graph, positions)
    }

    /// Places every node uniformly at random in `[-extent, extent)²`.
    ///
    /// Panics when `extent` is not positive
    pub fn random<R: Rng + ?Sized>(graph: &Graph, rng: &mut R, extent: f64) -> Self {
        let positions = graph
            .nodes()
            .map(|_| DVec2::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent)))
            .collect();
        Self { positions }
    }

    /// Fails unless this drawing has exactly one position per node of `graph`.
    pub fn check(&self, graph: &Graph) -> Result<()> {
        if self.positions.len() != graph.node_count() {
            return Err(Error::PositionCount {
                expected: graph.node_count(),
                found: self.positions.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn position(&self, node: NodeIndex) -> DVec2 {
        self.positions[node.index()]
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The drawing keyed by node id.
    pub fn to_map(&self, graph: &Graph) -> BTreeMap<String, (f64, f64)> {
        graph
            .nodes()
            .map(|n| {
                let p = self.position(n);
                (graph.node_id(n).to_owned(), (p.x, p.y))
            })
            .collect()
    }
}
