//! Serializable view of the map's edges, for listing the track segments and
//! looking one up by key (`"AB"`).

use serde::Serialize;

use dr_core::EdgeId;
use dr_graph::RouteGraph;

/// One map edge as shown to a client.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeSummary {
    /// Edge key: endpoint names in declared order.
    pub id:       String,
    pub source:   String,
    pub target:   String,
    pub distance: f64,
    pub unit:     String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label:    Option<String>,
}

impl EdgeSummary {
    fn new(graph: &RouteGraph, edge: EdgeId, unit: &str) -> Self {
        let (a, b) = graph.edge_ends[edge.index()];
        Self {
            id:       graph.edge_key(edge),
            source:   graph.node_name(a).to_owned(),
            target:   graph.node_name(b).to_owned(),
            distance: graph.edge_weight(edge),
            unit:     unit.to_owned(),
            label:    graph.edge_label(edge).map(str::to_owned),
        }
    }
}

/// Every traversable edge, in declaration order.
pub fn edge_summaries(graph: &RouteGraph, unit: &str) -> Vec<EdgeSummary> {
    graph.edges().map(|e| EdgeSummary::new(graph, e, unit)).collect()
}

/// The edge with key `key`, if any.
pub fn find_edge(graph: &RouteGraph, key: &str, unit: &str) -> Option<EdgeSummary> {
    graph.edge_by_key(key).map(|e| EdgeSummary::new(graph, e, unit))
}
