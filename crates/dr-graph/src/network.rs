//! Map graph representation and builder.
//!
//! # Data layout
//!
//! Every undirected edge is stored once (indexed by `EdgeId`) and expanded
//! into two directed *arcs* for traversal.  Arcs use **Compressed Sparse
//! Row (CSR)** format.  Given a `NodeId n`, its arcs occupy the slice:
//!
//! ```text
//! arc_to[ node_arc_start[n] .. node_arc_start[n+1] ]
//! ```
//!
//! # Neighbour order
//!
//! Within a node's slice, arcs appear in **edge insertion order**.  The
//! enumerator visits neighbours in that order, so it fixes the discovery
//! order of routes and therefore the order of equal-cost routes after the
//! stable sort.
//!
//! # Names
//!
//! Nodes are addressed by string names at the API boundary and interned to
//! dense `NodeId`s (sequential from 0) in an `FxHashMap`.  Edges are
//! addressed by key, the two endpoint names in declared order (`"AB"`).

use log::{debug, warn};
use rustc_hash::FxHashMap;

use dr_core::{DrError, DrResult, EdgeId, NodeId, Point};

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Immutable undirected map graph in CSR format.
///
/// All fields except the name index are `pub` for direct indexed access.  Do
/// not construct directly; use [`RouteGraphBuilder`].
pub struct RouteGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Display name of each node.  Indexed by `NodeId`.
    pub node_name: Vec<String>,

    /// Layout position of each node.  `None` for nodes that only appeared as
    /// an edge endpoint and were never declared with a position.
    pub node_pos: Vec<Option<Point>>,

    // ── CSR arc adjacency ─────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_arc_start: Vec<u32>,

    /// Head node of each arc.
    pub arc_to: Vec<NodeId>,

    /// Undirected edge each arc was expanded from.
    pub arc_edge: Vec<EdgeId>,

    // ── Edge data (indexed by EdgeId = insertion order) ───────────────────
    /// Endpoints as declared, `(source, target)`.
    pub edge_ends: Vec<(NodeId, NodeId)>,

    /// Edge weight in distance units.
    pub edge_weight: Vec<f64>,

    /// Optional display label (e.g. `"64,5cm"`).
    pub edge_label: Vec<Option<String>>,

    name_index: FxHashMap<String, NodeId>,
    key_index:  FxHashMap<String, EdgeId>,
}

impl RouteGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_weight.len()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    /// Resolve a node name.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Resolve a node name, failing with [`DrError::NodeNotFound`].
    pub fn require(&self, name: &str) -> DrResult<NodeId> {
        self.node(name).ok_or_else(|| DrError::NodeNotFound(name.to_owned()))
    }

    #[inline]
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    #[inline]
    pub fn node_pos(&self, node: NodeId) -> Option<Point> {
        self.node_pos[node.index()]
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(neighbour, edge)` pairs reachable from `node`, in edge insertion
    /// order.  A contiguous index range; no allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        let start = self.node_arc_start[node.index()] as usize;
        let end   = self.node_arc_start[node.index() + 1] as usize;
        (start..end).map(|i| (self.arc_to[i], self.arc_edge[i]))
    }

    // ── Edge data ─────────────────────────────────────────────────────────

    #[inline]
    pub fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.edge_weight[edge.index()]
    }

    pub fn edge_label(&self, edge: EdgeId) -> Option<&str> {
        self.edge_label[edge.index()].as_deref()
    }

    /// Display key of an edge: its endpoint names concatenated in declared
    /// order (`"AB"` for an edge declared A–B), whichever way it is travelled.
    pub fn edge_key(&self, edge: EdgeId) -> String {
        let (a, b) = self.edge_ends[edge.index()];
        format!("{}{}", self.node_name(a), self.node_name(b))
    }

    /// Look an edge up by its [`edge_key`](Self::edge_key).  Keys are not
    /// reversible: `"AB"` finds the edge declared A–B, `"BA"` does not.
    /// Among parallel edges the first declared one owns the key.
    pub fn edge_by_key(&self, key: &str) -> Option<EdgeId> {
        self.key_index.get(key).copied()
    }

    /// Ids of every traversable edge, in declaration order.  Edges the
    /// builder could not attach to nodes are left out.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        let nodes = self.node_count();
        self.edge_ends
            .iter()
            .enumerate()
            .filter(move |(_, (a, b))| a.index() < nodes && b.index() < nodes)
            .map(|(i, _)| EdgeId(i as u32))
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder does no validation beyond what the structure needs: an edge
/// naming an undeclared node interns that node without a position.  Strict
/// checks belong to [`GraphData::build`](crate::GraphData::build).
///
/// # Example
///
/// ```
/// use dr_core::Point;
/// use dr_graph::RouteGraphBuilder;
///
/// let mut b = RouteGraphBuilder::new();
/// let a = b.add_node("A", Point::new(100.0, 250.0));
/// let c = b.add_node("B", Point::new(300.0, 100.0));
/// b.add_edge(a, c, 49.0, Some("49cm".into()));
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.neighbors(a).count(), 1);
/// assert_eq!(graph.edge_by_key("AB").map(|e| graph.edge_weight(e)), Some(49.0));
/// ```
#[derive(Default)]
pub struct RouteGraphBuilder {
    names:     Vec<String>,
    positions: Vec<Option<Point>>,
    index:     FxHashMap<String, NodeId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    a:      NodeId,
    b:      NodeId,
    weight: f64,
    label:  Option<String>,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            names:     Vec::with_capacity(nodes),
            positions: Vec::with_capacity(nodes),
            index:     FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Declare a node and return its `NodeId`.
    ///
    /// Re-declaring a name returns the existing id.  A position is filled in
    /// if the node was previously interned without one; otherwise the first
    /// position wins.
    pub fn add_node(&mut self, name: impl Into<String>, pos: Point) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            match self.positions[id.index()] {
                None => self.positions[id.index()] = Some(pos),
                Some(_) => warn!("node {name:?} declared twice; keeping first position"),
            }
            return id;
        }
        self.push_node(name, Some(pos))
    }

    /// Add an undirected edge between two existing nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64, label: Option<String>) -> EdgeId {
        let id = EdgeId(self.raw_edges.len() as u32);
        let label = label.filter(|l| !l.is_empty());
        self.raw_edges.push(RawEdge { a, b, weight, label });
        id
    }

    /// Add an undirected edge by endpoint names.  Unknown names are interned
    /// as position-less nodes.
    pub fn add_edge_by_name(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        label: Option<String>,
    ) -> EdgeId {
        let a = self.intern(source);
        let b = self.intern(target);
        self.add_edge(a, b, weight, label)
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        warn!("edge endpoint {name:?} was never declared; adding it without a position");
        self.push_node(name.to_owned(), None)
    }

    fn push_node(&mut self, name: String, pos: Option<Point>) -> NodeId {
        let id = NodeId(self.names.len() as u32);
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(pos);
        id
    }

    /// Consume the builder and produce a [`RouteGraph`].
    pub fn build(self) -> RouteGraph {
        let node_count = self.names.len();

        // Expand each edge into one arc per direction (one for a self-loop).
        let mut arcs: Vec<(NodeId, NodeId, EdgeId)> = Vec::with_capacity(self.raw_edges.len() * 2);
        for (i, e) in self.raw_edges.iter().enumerate() {
            let id = EdgeId(i as u32);
            if e.a.index() >= node_count || e.b.index() >= node_count {
                warn!("edge {id} references a node id outside the graph; it will not be traversed");
                continue;
            }
            arcs.push((e.a, e.b, id));
            if e.a != e.b {
                arcs.push((e.b, e.a, id));
            }
        }

        // Stable: keeps insertion order inside each node's slice.
        arcs.sort_by_key(|&(from, _, _)| from.0);

        let arc_to:   Vec<NodeId> = arcs.iter().map(|&(_, to, _)| to).collect();
        let arc_edge: Vec<EdgeId> = arcs.iter().map(|&(_, _, e)| e).collect();

        let mut node_arc_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &arcs {
            node_arc_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_arc_start[i] += node_arc_start[i - 1];
        }
        debug_assert_eq!(node_arc_start[node_count] as usize, arcs.len());

        let mut edge_ends   = Vec::with_capacity(self.raw_edges.len());
        let mut edge_weight = Vec::with_capacity(self.raw_edges.len());
        let mut edge_label  = Vec::with_capacity(self.raw_edges.len());
        for e in self.raw_edges {
            edge_ends.push((e.a, e.b));
            edge_weight.push(e.weight);
            edge_label.push(e.label);
        }

        let mut key_index = FxHashMap::with_capacity_and_hasher(edge_ends.len(), Default::default());
        for (i, &(a, b)) in edge_ends.iter().enumerate() {
            let (Some(a), Some(b)) = (self.names.get(a.index()), self.names.get(b.index())) else {
                continue;
            };
            key_index.entry(format!("{a}{b}")).or_insert(EdgeId(i as u32));
        }

        debug!("built route graph: {node_count} nodes, {} edges", edge_weight.len());

        RouteGraph {
            node_name: self.names,
            node_pos: self.positions,
            node_arc_start,
            arc_to,
            arc_edge,
            edge_ends,
            edge_weight,
            edge_label,
            name_index: self.index,
            key_index,
        }
    }
}
