//! Graph loading from JSON or CSV.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "nodes": [{ "id": "A", "x": 100, "y": 250 }, ...],
//!   "edges": [{ "source": "A", "target": "B", "weight": 49, "label": "49cm" }, ...]
//! }
//! ```
//!
//! `label` is optional.
//!
//! # CSV format
//!
//! Two sources, one per record kind:
//!
//! ```csv
//! id,x,y
//! A,100,250
//! B,300,100
//! ```
//!
//! ```csv
//! source,target,weight,label
//! A,B,49,49cm
//! B,E,64.5,"64,5cm"
//! ```
//!
//! An empty `label` field means "no label".
//!
//! # Validation
//!
//! Unlike [`RouteGraphBuilder`], loading is strict: duplicate node ids,
//! edges naming undeclared nodes, and negative or non-finite weights are
//! rejected with a [`GraphError`].

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use dr_core::Point;

use crate::network::{RouteGraph, RouteGraphBuilder};
use crate::{GraphError, GraphResult};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub x:  f64,
    pub y:  f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label:  Option<String>,
}

/// Raw node and edge lists as supplied by a graph data source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphData {
    /// Check the records without building anything.
    pub fn validate(&self) -> GraphResult<()> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for n in &self.nodes {
            if !seen.insert(n.id.as_str()) {
                return Err(GraphError::DuplicateNode(n.id.clone()));
            }
        }

        for (i, e) in self.edges.iter().enumerate() {
            for end in [&e.source, &e.target] {
                if !seen.contains(end.as_str()) {
                    return Err(GraphError::UnknownNode { edge: i, node: end.clone() });
                }
            }
            if !(e.weight.is_finite() && e.weight >= 0.0) {
                return Err(GraphError::InvalidWeight { edge: i, weight: e.weight });
            }
        }
        Ok(())
    }

    /// Validate, then build an immutable [`RouteGraph`].
    ///
    /// Node ids are assigned in record order and edges keep record order, so
    /// the record order fixes neighbour iteration order.
    pub fn build(&self) -> GraphResult<RouteGraph> {
        self.validate()?;

        let mut b = RouteGraphBuilder::with_capacity(self.nodes.len(), self.edges.len());
        for n in &self.nodes {
            b.add_node(n.id.as_str(), Point::new(n.x, n.y));
        }
        for e in &self.edges {
            b.add_edge_by_name(&e.source, &e.target, e.weight, e.label.clone());
        }
        Ok(b.build())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a graph from a JSON file.
pub fn load_graph_json(path: &Path) -> GraphResult<RouteGraph> {
    let file = std::fs::File::open(path)?;
    load_graph_json_reader(std::io::BufReader::new(file))
}

/// Like [`load_graph_json`] but accepts any `Read` source.
pub fn load_graph_json_reader<R: Read>(reader: R) -> GraphResult<RouteGraph> {
    let data: GraphData = serde_json::from_reader(reader)?;
    data.build()
}

/// Load and validate a graph from a node CSV and an edge CSV.
pub fn load_graph_csv(nodes_path: &Path, edges_path: &Path) -> GraphResult<RouteGraph> {
    let nodes = std::fs::File::open(nodes_path)?;
    let edges = std::fs::File::open(edges_path)?;
    load_graph_csv_readers(nodes, edges)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for CSV embedded in a
/// binary.
pub fn load_graph_csv_readers<N: Read, E: Read>(nodes: N, edges: E) -> GraphResult<RouteGraph> {
    read_graph_csv(nodes, edges)?.build()
}

/// Parse the two CSV sources into [`GraphData`] without validating.
pub fn read_graph_csv<N: Read, E: Read>(nodes: N, edges: E) -> GraphResult<GraphData> {
    let mut node_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(nodes);
    let nodes = node_reader
        .deserialize::<NodeRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    let mut edge_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(edges);
    let edges = edge_reader
        .deserialize::<EdgeRecord>()
        .map(|row| {
            row.map(|mut e| {
                e.label = e.label.filter(|l| !l.is_empty());
                e
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GraphData { nodes, edges })
}
