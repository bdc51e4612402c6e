//! `dr-dispatch` — the request/response boundary around enumerated routes.
//!
//! Route enumeration (`dr-graph`) knows nothing about this crate.  Here the
//! sorted routes are numbered into a catalog that a UI can list, inspect,
//! and hand to a vehicle through a [`Dispatcher`].
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`catalog`]    | `RouteCatalog`, `RouteSummary`, `RouteDetail`, `Leg`     |
//! | [`command`]    | `Command` and its wire encoding                          |
//! | [`dispatcher`] | `Dispatcher` trait, offline/recording impls, reports     |
//! | [`edges`]      | `EdgeSummary`, edge listing and lookup by key            |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                     |

pub mod catalog;
pub mod command;
pub mod dispatcher;
pub mod edges;
pub mod error;


pub use catalog::{Leg, RouteCatalog, RouteDetail, RouteSummary};
pub use command::Command;
pub use dispatcher::{
    Dispatcher, ExecutionReport, OfflineDispatcher, RecordingDispatcher, VehicleStatus, status, stop,
};
pub use edges::{EdgeSummary, edge_summaries, find_edge};
pub use error::{DispatchError, DispatchResult};
