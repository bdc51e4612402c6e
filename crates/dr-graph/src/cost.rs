//! Route scoring for each [`CostModel`].
//!
//! The enumerator produces a node sequence plus its summed edge weight; this
//! module turns that into a time estimate.  Keeping scoring separate from
//! the search means every model shares the same DFS.
//!
//! # Angle severity
//!
//! For each consecutive triple `(p, q, r)` on the path, `θ` is the interior
//! angle at `q` ([`Point::turn_angle_deg`](dr_core::Point::turn_angle_deg)):
//!
//! ```text
//! severity(q) = penalty_factor * (180 - θ) / 180
//! time        = base_time * (1 + Σ severity)
//! ```
//!
//! A triple contributes nothing when any of its nodes has no position or a
//! leg has zero length.

use dr_core::{CostModel, NodeId, RouteConfig};

use crate::network::RouteGraph;

/// Distance and time estimate for one route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCost {
    /// Sum of traversed edge weights.
    pub distance: f64,
    /// Estimated traversal time in minutes, turn penalty included.
    pub time_min: f64,
    /// Minutes the turn penalty added on top of the base time.
    pub penalty_min: f64,
}

impl RouteCost {
    /// The value routes are ordered by under `model`.
    #[inline]
    pub fn metric(&self, model: CostModel) -> f64 {
        if model.is_turn_aware() { self.time_min } else { self.distance }
    }
}

/// Score a completed path.
pub fn score(graph: &RouteGraph, config: &RouteConfig, nodes: &[NodeId], distance: f64) -> RouteCost {
    let base = config.base_time_min(distance);
    let penalty_min = match config.cost_model {
        CostModel::Distance => 0.0,
        CostModel::TurnAngle { penalty_factor } => base * angle_severity(graph, nodes, penalty_factor),
        CostModel::TurnCount { minutes_per_turn } => turn_count(nodes) as f64 * minutes_per_turn,
    };
    RouteCost { distance, time_min: base + penalty_min, penalty_min }
}

/// Summed per-turn severity along `nodes`.  Zero for paths under 3 nodes.
pub fn angle_severity(graph: &RouteGraph, nodes: &[NodeId], penalty_factor: f64) -> f64 {
    nodes
        .windows(3)
        .filter_map(|w| {
            let prev = graph.node_pos(w[0])?;
            let at   = graph.node_pos(w[1])?;
            let next = graph.node_pos(w[2])?;
            at.turn_angle_deg(prev, next)
        })
        .map(|angle| penalty_factor * (180.0 - angle) / 180.0)
        .sum()
}

/// Number of intermediate nodes, each counted as one turn.
#[inline]
pub fn turn_count(nodes: &[NodeId]) -> usize {
    nodes.len().saturating_sub(2)
}
