//! Error types for tree construction and engine setup.
//!
//! The search itself is total: malformed subtrees collapse to a neutral value
//! instead of failing. Errors only come from parsing input, from the strict
//! missing-value policy, and from invalid generator settings.

use thiserror::Error;

/// Errors raised around a search, never during one.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameTreeError {
    /// The tree literal could not be parsed.
    #[error("malformed tree literal: {0}")]
    Parse(#[from] serde_json::Error),

    /// Nodes that would silently evaluate to the neutral value at this depth.
    #[error("{} node(s) have no terminal value within depth {depth}: {}", .paths.len(), .paths.join(", "))]
    UnresolvedNodes { depth: i32, paths: Vec<String> },

    /// Random tree settings that cannot produce a tree.
    #[error("invalid random tree spec: {message}")]
    InvalidRandomSpec { message: String },
}

/// Result type alias for game tree operations
pub type Result<T> = std::result::Result<T, GameTreeError>;
