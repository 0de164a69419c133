//! Depth-limited minimax and alpha-beta evaluation over a declared game tree.
//!
//! The tree is built once (from a JSON literal or in code) and searched any
//! number of times. Every search produces an ordered trace of the alpha/beta
//! window after each child is folded in, plus a record whenever a cutoff fires.

pub mod engine;
pub mod error;
pub mod tree;

pub use engine::config::EngineConfig;
pub use engine::search::{evaluate, MinimaxEngine};
pub use engine::trace::{TraceLog, TraceRecord, TraceSink};
pub use engine::{Player, SearchOutcome, SearchParams, SearchStats, Searcher};
pub use error::{GameTreeError, Result};
pub use tree::node::TreeNode;
