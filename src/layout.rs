//! The contract between metric evaluation and whatever produces drawings.

use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Anything that turns a graph and a seed into a drawing.
///
/// Implemented for every `Fn(&Graph, u64) -> Result<Drawing>`.
pub trait Layout {
    fn draw(&self, graph: &Graph, seed: u64) -> Result<Drawing>;
}

impl<F> Layout for F
where
    F: Fn(&Graph, u64) -> Result<Drawing>,
{
    fn draw(&self, graph: &Graph, seed: u64) -> Result<Drawing> {
        self(graph, seed)
    }
}

/// Parameters of a sparse stochastic gradient descent layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SgdParams {
    pub number_of_pivots: usize,
    pub number_of_iterations: usize,
    pub eps: f64,
    pub edge_length: f64,
}

impl SgdParams {
    /// Hand-tuned values that work for most graphs.
    pub fn empirical() -> Self {
        Self {
            number_of_pivots: 50,
            number_of_iterations: 100,
            eps: 0.1,
            edge_length: 1.0,
        }
    }

    /// Bounds a parameter search explores.
    pub fn domain() -> SgdDomain {
        SgdDomain {
            number_of_pivots: 1..=100,
            number_of_iterations: 1..=200,
            eps: 0.01..=1.0,
        }
    }
}

impl Default for SgdParams {
    fn default() -> Self {
        Self::empirical()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SgdDomain {
    pub number_of_pivots: RangeInclusive<usize>,
    pub number_of_iterations: RangeInclusive<usize>,
    pub eps: RangeInclusive<f64>,
}

impl SgdDomain {
    pub fn contains(&self, params: &SgdParams) -> bool {
        self.number_of_pivots.contains(&params.number_of_pivots)
            && self.number_of_iterations.contains(&params.number_of_iterations)
            && self.eps.contains(&params.eps)
    }
}
