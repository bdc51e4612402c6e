//! Exhaustive simple-path enumeration.
//!
//! # Algorithm
//!
//! Depth-first search with backtracking.  The search keeps three reusable
//! buffers: the node stack, the edge stack, and an `on_path` flag per node.
//! A node is flagged while it sits on the current branch and cleared when
//! the search backs out of it, so sibling branches may pass through it
//! again.  Reaching `end` records the current stacks as a route; `end` is
//! never expanded further.
//!
//! Path length is bounded by the node count, so the search always
//! terminates.  Cost grows with the number of simple paths, which is fine
//! for hand-built delivery maps and not intended for road-scale graphs.
//!
//! # Ordering
//!
//! Routes are stable-sorted ascending by [`RouteCost::metric`]: distance for
//! [`CostModel::Distance`], penalized time otherwise.  Ties keep discovery
//! order, which follows edge insertion order (see [`crate::network`]).

use log::debug;

use dr_core::{CostModel, EdgeId, NodeId, RouteConfig};

use crate::cost::{self, RouteCost};
use crate::network::RouteGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// One simple path from start to end with its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Visited nodes in order, start first, end last.
    pub nodes: Vec<NodeId>,
    /// Traversed edges in order; `edges.len() == nodes.len() - 1`.
    pub edges: Vec<EdgeId>,
    pub cost: RouteCost,
}

impl Route {
    /// Node names in travel order.
    pub fn node_names<'g>(&self, graph: &'g RouteGraph) -> Vec<&'g str> {
        self.nodes.iter().map(|&n| graph.node_name(n)).collect()
    }

    /// Edge keys (`"AB"`, `"BE"`, ...) in travel order.
    pub fn edge_keys(&self, graph: &RouteGraph) -> Vec<String> {
        self.edges.iter().map(|&e| graph.edge_key(e)).collect()
    }
}

// ── RouteEnumerator ───────────────────────────────────────────────────────────

/// Enumerates and scores every simple path between two nodes of a graph.
///
/// The graph is immutable after construction and each call allocates its
/// own search state, so one enumerator can be shared between threads.
pub struct RouteEnumerator {
    graph:  RouteGraph,
    config: RouteConfig,
}

impl RouteEnumerator {
    pub fn new(graph: RouteGraph, config: RouteConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn cost_model(&self) -> CostModel {
        self.config.cost_model
    }

    /// All simple routes from `start` to `end` by node name, sorted.
    ///
    /// Unknown names, an isolated start, an unreachable end, and
    /// `start == end` all yield an empty list.
    pub fn enumerate(&self, start: &str, end: &str) -> Vec<Route> {
        match (self.graph.node(start), self.graph.node(end)) {
            (Some(s), Some(e)) => self.enumerate_nodes(s, e),
            _ => {
                debug!("enumerate {start:?} → {end:?}: endpoint not in graph");
                Vec::new()
            }
        }
    }

    /// Like [`enumerate`](Self::enumerate) but with resolved node ids.
    pub fn enumerate_nodes(&self, start: NodeId, end: NodeId) -> Vec<Route> {
        if start == end {
            return Vec::new();
        }

        let mut search = Search::new(&self.graph, start, end);
        search.visit(start, 0.0);

        let mut routes: Vec<Route> = search
            .found
            .into_iter()
            .map(|(nodes, edges, distance)| {
                let cost = cost::score(&self.graph, &self.config, &nodes, distance);
                Route { nodes, edges, cost }
            })
            .collect();

        let model = self.config.cost_model;
        routes.sort_by(|a, b| a.cost.metric(model).total_cmp(&b.cost.metric(model)));

        debug!(
            "enumerate {} → {}: {} routes ({model})",
            self.graph.node_name(start),
            self.graph.node_name(end),
            routes.len()
        );
        routes
    }
}

// ── DFS internals ─────────────────────────────────────────────────────────────

struct Search<'g> {
    graph:   &'g RouteGraph,
    end:     NodeId,
    on_path: Vec<bool>,
    nodes:   Vec<NodeId>,
    edges:   Vec<EdgeId>,
    found:   Vec<(Vec<NodeId>, Vec<EdgeId>, f64)>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g RouteGraph, start: NodeId, end: NodeId) -> Self {
        Self {
            graph,
            end,
            on_path: vec![false; graph.node_count()],
            nodes: vec![start],
            edges: Vec::new(),
            found: Vec::new(),
        }
    }

    fn visit(&mut self, current: NodeId, distance: f64) {
        if current == self.end {
            self.found.push((self.nodes.clone(), self.edges.clone(), distance));
            return;
        }

        self.on_path[current.index()] = true;

        let graph = self.graph;
        for (next, edge) in graph.neighbors(current) {
            if self.on_path[next.index()] {
                continue;
            }
            self.nodes.push(next);
            self.edges.push(edge);
            self.visit(next, distance + graph.edge_weight(edge));
            self.nodes.pop();
            self.edges.pop();
        }

        self.on_path[current.index()] = false;
    }
}
