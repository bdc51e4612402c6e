//! Graph-loading error type.
//!
//! Enumeration itself never fails; these errors come only from turning raw
//! node/edge data into a [`RouteGraph`](crate::RouteGraph).

use thiserror::Error;

/// Errors produced by `dr-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate node id {0:?}")]
    DuplicateNode(String),

    #[error("edge #{edge} references unknown node {node:?}")]
    UnknownNode { edge: usize, node: String },

    #[error("edge #{edge} has invalid weight {weight}: must be finite and non-negative")]
    InvalidWeight { edge: usize, weight: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
