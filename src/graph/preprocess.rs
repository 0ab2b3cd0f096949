use super::{Graph, RawGraph};
use crate::error::{Error, Result};
use log::info;
use std::collections::{HashMap, VecDeque};

/// How edge weights are assigned while preprocessing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeWeight {
    /// Every edge gets the same weight.
    Uniform(f64),
    /// Use the `weight` attribute of each link, falling back to `default`.
    Attribute { default: f64 },
}

impl Default for EdgeWeight {
    fn default() -> Self {
        Self::Uniform(1.0)
    }
}

impl EdgeWeight {
    fn resolve(self, attribute: Option<f64>) -> f64 {
        match self {
            Self::Uniform(weight) => weight,
            Self::Attribute { default } => attribute.unwrap_or(default),
        }
    }
}

/// Turns an arbitrary node-link graph into a [`Graph`].
///
/// Links are read as undirected. Self-loops are dropped and repeated links
/// between the same pair collapse into one edge that keeps its first
/// position and the last weight seen. Only the largest connected component
/// survives; on a tie the component containing the earliest node wins.
///
/// Node ids keep their input order. Edge ids follow adjacency order: nodes
/// in order, and for each node its not yet visited neighbours in the order
/// their links appeared.
pub fn preprocess(raw: &RawGraph, weight: EdgeWeight) -> Result<Graph> {
    let mut order: Vec<&str> = Vec::with_capacity(raw.nodes.len());
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(raw.nodes.len());

    for id in &raw.nodes {
        if !position.contains_key(id.as_str()) {
            position.insert(id.as_str(), order.len());
            order.push(id.as_str());
        }
    }
    for link in &raw.links {
        for id in [link.source.as_str(), link.target.as_str()] {
            if !position.contains_key(id) {
                position.insert(id, order.len());
                order.push(id);
            }
        }
    }
    if order.is_empty() {
        return Err(Error::EmptyGraph);
    }

    // Insertion-ordered adjacency; each entry is (neighbour, weight attribute).
    let mut adjacency: Vec<Vec<(usize, Option<f64>)>> = vec![Vec::new(); order.len()];
    let mut self_loops = 0usize;
    for link in &raw.links {
        let u = position[link.source.as_str()];
        let v = position[link.target.as_str()];
        if u == v {
            self_loops += 1;
            continue;
        }
        upsert(&mut adjacency[u], v, link.weight);
        upsert(&mut adjacency[v], u, link.weight);
    }

    let component = largest_component(&adjacency);
    let mut in_component = vec![false; order.len()];
    for &node in &component {
        in_component[node] = true;
    }

    let nodes: Vec<String> = (0..order.len())
        .filter(|&i| in_component[i])
        .map(|i| order[i].to_owned())
        .collect();

    let mut visited = vec![false; order.len()];
    let mut edges = Vec::new();
    for u in (0..order.len()).filter(|&i| in_component[i]) {
        for &(v, attribute) in &adjacency[u] {
            if !visited[v] {
                edges.push((order[u], order[v], weight.resolve(attribute)));
            }
        }
        visited[u] = true;
    }

    info!(
        "preprocessed graph: kept {} of {} nodes and {} edges, dropped {} self-loops",
        nodes.len(),
        order.len(),
        edges.len(),
        self_loops
    );

    Graph::from_edges(nodes, edges)
}

fn upsert(neighbours: &mut Vec<(usize, Option<f64>)>, node: usize, weight: Option<f64>) {
    match neighbours.iter_mut().find(|(n, _)| *n == node) {
        Some(entry) => entry.1 = weight.or(entry.1),
        None => neighbours.push((node, weight)),
    }
}

/// Nodes of the largest connected component, found by breadth-first search
/// from each unvisited node in order.
fn largest_component(adjacency: &[Vec<(usize, Option<f64>)>]) -> Vec<usize> {
    let mut seen = vec![false; adjacency.len()];
    let mut best: Vec<usize> = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..adjacency.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        queue.push_back(start);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for &(next, _) in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        if component.len() > best.len() {
            best = component;
        }
    }
    best
}
