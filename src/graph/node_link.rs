//! Reading graphs stored in the networkx node-link JSON layout.

use super::{preprocess, EdgeWeight, Graph};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A graph as read from disk, before preprocessing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawGraph {
    pub nodes: Vec<String>,
    pub links: Vec<RawLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawLink {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

#[derive(Deserialize)]
struct NodeLinkData {
    #[serde(default)]
    nodes: Vec<NodeLinkNode>,
    #[serde(default, alias = "edges")]
    links: Vec<NodeLinkLink>,
}

#[derive(Deserialize)]
struct NodeLinkNode {
    id: Value,
}

#[derive(Deserialize)]
struct NodeLinkLink {
    source: Value,
    target: Value,
    #[serde(default)]
    weight: Option<f64>,
}

/// Node ids may be strings or numbers; numbers keep their JSON spelling.
fn id_string(id: Value) -> String {
    match id {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl NodeLinkData {
    fn into_raw(self) -> RawGraph {
        RawGraph {
            nodes: self.nodes.into_iter().map(|n| id_string(n.id)).collect(),
            links: self
                .links
                .into_iter()
                .map(|l| RawLink {
                    source: id_string(l.source),
                    target: id_string(l.target),
                    weight: l.weight,
                })
                .collect(),
        }
    }
}

impl RawGraph {
    /// Parses node-link JSON. `directed`, `multigraph`, `graph` and any
    /// extra attributes are ignored; links are always read as undirected.
    pub fn from_node_link_json(json: &str) -> Result<Self> {
        let data: NodeLinkData = serde_json::from_str(json)?;
        Ok(data.into_raw())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data: NodeLinkData = serde_json::from_reader(reader)?;
        Ok(data.into_raw())
    }
}

/// Reads a node-link JSON file and preprocesses it into a [`Graph`].
pub fn load_graph(path: impl AsRef<Path>, weight: EdgeWeight) -> Result<Graph> {
    let file = File::open(path)?;
    let raw = RawGraph::from_reader(BufReader::new(file))?;
    preprocess(&raw, weight)
}
