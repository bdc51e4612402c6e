//! `dr-core` — foundational types shared by every `dr-*` crate.
//!
//! This crate has no `dr-*` dependencies and a single required external one
//! (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`, `RouteId`                         |
//! | [`geo`]         | `Point`, turn-angle geometry                          |
//! | [`config`]      | `RouteConfig`, `CostModel`                            |
//! | [`error`]       | `DrError`, `DrResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CostModel, RouteConfig};
pub use error::{DrError, DrResult};
pub use geo::Point;
pub use ids::{EdgeId, NodeId, RouteId};
