//! Numbered, display-ready view of an enumerated route list.
//!
//! Routes are numbered from 1 in the order the enumerator sorted them, so
//! "Route 1" is always the cheapest under the active cost model.  Every
//! name and key is resolved against the graph up front, so the catalog owns
//! plain strings and outlives the graph it was built from.

use serde::Serialize;

use dr_core::{CostModel, RouteId};
use dr_graph::{Route, RouteEnumerator, RouteGraph};

use crate::dispatcher::{ExecutionReport, deliver};
use crate::{Command, Dispatcher};

/// One traversed edge, in travel direction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leg {
    pub from:   String,
    pub to:     String,
    /// Edge key, e.g. `"BE"`, independent of travel direction.
    pub edge:   String,
    pub label:  Option<String>,
    pub weight: f64,
}

/// List-view entry for one route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteSummary {
    pub id:                 RouteId,
    pub name:               String,
    pub distance:           f64,
    pub unit:               String,
    pub estimated_time_min: f64,
    pub node_count:         usize,
    pub nodes:              Vec<String>,
    pub edges:              Vec<String>,
}

/// Full detail for one route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteDetail {
    #[serde(flatten)]
    pub summary:     RouteSummary,
    pub cost_model:  String,
    /// Minutes the turn penalty contributed to `estimated_time_min`.
    pub penalty_min: f64,
    pub legs:        Vec<Leg>,
}

pub struct RouteCatalog {
    entries: Vec<RouteDetail>,
}

impl RouteCatalog {
    /// Distance unit used by [`new`](Self::new).
    pub const DEFAULT_UNIT: &'static str = "cm";

    pub fn new(graph: &RouteGraph, routes: &[Route], model: CostModel) -> Self {
        Self::with_unit(graph, routes, model, Self::DEFAULT_UNIT)
    }

    pub fn with_unit(graph: &RouteGraph, routes: &[Route], model: CostModel, unit: &str) -> Self {
        // Numbering stops at u32::MAX; no enumerable map comes close.
        let entries = routes
            .iter()
            .enumerate()
            .map_while(|(i, route)| {
                let id = RouteId::try_from(i + 1).ok()?;
                Some(describe(graph, route, id, model, unit))
            })
            .collect();
        Self { entries }
    }

    /// Enumerate `start → end` and catalog the result.
    pub fn from_enumerator(enumerator: &RouteEnumerator, start: &str, end: &str) -> Self {
        let routes = enumerator.enumerate(start, end);
        Self::new(enumerator.graph(), &routes, enumerator.cost_model())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries.iter().map(|d| d.summary.clone()).collect()
    }

    pub fn details(&self) -> &[RouteDetail] {
        &self.entries
    }

    pub fn detail(&self, id: RouteId) -> Option<&RouteDetail> {
        let idx = id.index().checked_sub(1)?;
        self.entries.get(idx)
    }

    /// Ask `dispatcher` to drive route `id`.
    pub fn execute(&self, id: RouteId, dispatcher: &mut dyn Dispatcher) -> ExecutionReport {
        let Some(detail) = self.detail(id) else {
            return ExecutionReport::not_found(id);
        };

        let command = Command::ExecuteRoute(id);
        let (success, message) = deliver(dispatcher, command, "route dispatched");
        ExecutionReport {
            success,
            message,
            command:    Some(command.wire()),
            route_id:   Some(id),
            route_name: Some(detail.summary.name.clone()),
        }
    }
}

fn describe(graph: &RouteGraph, route: &Route, id: RouteId, model: CostModel, unit: &str) -> RouteDetail {
    let legs: Vec<Leg> = route
        .nodes
        .windows(2)
        .zip(&route.edges)
        .map(|(pair, &edge)| Leg {
            from:   graph.node_name(pair[0]).to_owned(),
            to:     graph.node_name(pair[1]).to_owned(),
            edge:   graph.edge_key(edge),
            label:  graph.edge_label(edge).map(str::to_owned),
            weight: graph.edge_weight(edge),
        })
        .collect();

    RouteDetail {
        summary: RouteSummary {
            id,
            name:               format!("Route {id}"),
            distance:           route.cost.distance,
            unit:               unit.to_owned(),
            estimated_time_min: route.cost.time_min,
            node_count:         route.nodes.len(),
            nodes:              route.node_names(graph).into_iter().map(str::to_owned).collect(),
            edges:              route.edge_keys(graph),
        },
        cost_model:  model.to_string(),
        penalty_min: route.cost.penalty_min,
        legs,
    }
}
