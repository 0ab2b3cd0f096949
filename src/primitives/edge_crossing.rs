//! Brute-force detection of properly crossing edge pairs.

use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use glam::DVec2;
use log::debug;
use petgraph::graph::EdgeIndex;

/// Whether segment `p1p2` properly crosses segment `p3p4`.
///
/// Strict orientation test: segments that only touch, overlap collinearly or
/// share an endpoint do not cross.
#[inline]
pub fn is_edge_crossing(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> bool {
    let tc1 = (p1.x - p2.x) * (p3.y - p1.y) + (p1.y - p2.y) * (p1.x - p3.x);
    let tc2 = (p1.x - p2.x) * (p4.y - p1.y) + (p1.y - p2.y) * (p1.x - p4.x);
    let td1 = (p3.x - p4.x) * (p1.y - p3.y) + (p3.y - p4.y) * (p3.x - p1.x);
    let td2 = (p3.x - p4.x) * (p2.y - p3.y) + (p3.y - p4.y) * (p3.x - p2.x);
    tc1 * tc2 < 0.0 && td1 * td2 < 0.0
}

/// Every unordered pair of crossing edges in one drawing.
///
/// Pairs are stored as `(lower id, higher id)` in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeCrossings {
    pairs: Vec<(EdgeIndex, EdgeIndex)>,
}

impl EdgeCrossings {
    /// Tests all `C(|E|, 2)` edge pairs.
    pub fn find(graph: &Graph, drawing: &Drawing) -> Result<Self> {
        drawing.check(graph)?;
        let segments: Vec<(DVec2, DVec2)> = graph
            .edges()
            .map(|e| (drawing.position(e.source), drawing.position(e.target)))
            .collect();

        let mut pairs = Vec::new();
        for (i, &(p1, p2)) in segments.iter().enumerate() {
            for (j, &(p3, p4)) in segments.iter().enumerate().skip(i + 1) {
                if is_edge_crossing(p1, p2, p3, p4) {
                    pairs.push((EdgeIndex::new(i), EdgeIndex::new(j)));
                }
            }
        }

        debug!(
            "found {} edge crossings among {} edges",
            pairs.len(),
            segments.len()
        );
        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeIndex, EdgeIndex)> + '_ {
        self.pairs.iter().copied()
    }

    /// Order-insensitive membership test.
    pub fn contains(&self, a: EdgeIndex, b: EdgeIndex) -> bool {
        let key = (a.min(b), a.max(b));
        self.pairs.binary_search(&key).is_ok()
    }
}

/// All crossing edge pairs of `drawing`.
pub fn edge_crossing_finder(graph: &Graph, drawing: &Drawing) -> Result<EdgeCrossings> {
    EdgeCrossings::find(graph, drawing)
}
