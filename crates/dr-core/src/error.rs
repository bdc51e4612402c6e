//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `DispatchError`)
//! and wrap `DrError` where a core failure can surface through them.

use thiserror::Error;

/// The error type for `dr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DrError {
    #[error("node {0:?} not found")]
    NodeNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `dr-*` crates.
pub type DrResult<T> = Result<T, DrError>;
