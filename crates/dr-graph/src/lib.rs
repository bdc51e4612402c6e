//! `dr-graph` — map graph, route enumeration, and route costing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`network`]    | `RouteGraph` (CSR adjacency), `RouteGraphBuilder`         |
//! | [`enumerator`] | `RouteEnumerator`, `Route`                                |
//! | [`cost`]       | Turn-penalty scoring for each `CostModel`                 |
//! | [`loader`]     | `GraphData`, JSON and CSV graph loading                   |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route` and core types. |

pub mod cost;
pub mod enumerator;
pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use cost::RouteCost;
pub use enumerator::{Route, RouteEnumerator};
pub use error::{GraphError, GraphResult};
pub use loader::{
    EdgeRecord, GraphData, NodeRecord, load_graph_csv, load_graph_csv_readers, load_graph_json,
    load_graph_json_reader, read_graph_csv,
};
pub use network::{RouteGraph, RouteGraphBuilder};
