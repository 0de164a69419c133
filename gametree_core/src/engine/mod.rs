use crate::engine::config::EngineConfig;
use crate::engine::trace::TraceLog;
use crate::tree::node::TreeNode;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod search;
pub mod trace;


/// The side to move at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    Max,
    Min,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }

    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Self::Max)
    }

    #[must_use]
    pub const fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Self::Max
        } else {
            Self::Min
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Plies to expand. Zero or less scores the root directly.
    pub depth: i32,
    pub player: Player,
    pub pruning: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for SearchParams {
    fn from(config: &EngineConfig) -> Self {
        Self {
            depth: config.depth,
            player: Player::from_maximizing(config.maximizing),
            pruning: config.pruning,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: i32,
    /// Nodes entered, terminals included.
    pub nodes: u32,
    /// Children folded into a parent (one `Visit` record each).
    pub visits: u32,
    pub prunes: u32,
    pub time_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub value: f64,
    /// Root child that first reached `value`, if the root was expanded.
    pub best_label: Option<String>,
    pub trace: TraceLog,
    pub stats: SearchStats,
}

pub trait Searcher {
    fn search(&mut self, tree: &TreeNode, params: &SearchParams) -> crate::Result<SearchOutcome>;
}
