use crate::engine::config::{EngineConfig, MissingValuePolicy};
use crate::engine::trace::{TraceLog, TraceRecord, TraceSink};
use crate::engine::{SearchOutcome, SearchParams, SearchStats, Searcher};
use crate::error::{GameTreeError, Result};
use crate::tree::node::TreeNode;
use crate::tree::validate;
use std::sync::Arc;
use std::time::Instant;

/// Depth-limited minimax over `node`, with alpha-beta cutoffs when `pruning`
/// is set. Appends one `Visit` per child folded in and a `Pruned` record when
/// `alpha >= beta` stops a node early.
///
/// A leaf returns its value at any depth. An absent node, a childless
/// internal node, or an internal node reached with `depth <= 0` returns `0`.
pub fn evaluate<S: TraceSink + ?Sized>(
    node: Option<&TreeNode>,
    depth: i32,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    pruning: bool,
    sink: &mut S,
) -> f64 {
    Walk::new(sink, pruning)
        .alpha_beta(node, depth, alpha, beta, maximizing)
        .value
}

struct Scored {
    value: f64,
    best_child: Option<usize>,
}

impl Scored {
    const fn terminal(value: f64) -> Self {
        Self {
            value,
            best_child: None,
        }
    }
}

struct Walk<'a, S: TraceSink + ?Sized> {
    sink: &'a mut S,
    pruning: bool,
    nodes: u32,
    visits: u32,
    prunes: u32,
}

impl<'a, S: TraceSink + ?Sized> Walk<'a, S> {
    fn new(sink: &'a mut S, pruning: bool) -> Self {
        Self {
            sink,
            pruning,
            nodes: 0,
            visits: 0,
            prunes: 0,
        }
    }

    fn alpha_beta(
        &mut self,
        node: Option<&TreeNode>,
        depth: i32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Scored {
        self.nodes += 1;

        let children = match node {
            Some(TreeNode::Leaf(value)) => return Scored::terminal(*value),
            Some(TreeNode::Internal(children)) if depth > 0 && !children.is_empty() => children,
            _ => return Scored::terminal(0.0),
        };

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_child = None;

        for (index, (label, child)) in children.iter().enumerate() {
            let value = self
                .alpha_beta(Some(child), depth - 1, alpha, beta, !maximizing)
                .value;

            if maximizing {
                if best_child.is_none() || value > best {
                    best = value;
                    best_child = Some(index);
                }
                alpha = alpha.max(best);
            } else {
                if best_child.is_none() || value < best {
                    best = value;
                    best_child = Some(index);
                }
                beta = beta.min(best);
            }

            self.visits += 1;
            self.sink.record(TraceRecord::Visit {
                label: label.clone(),
                value,
                best,
                alpha,
                beta,
            });

            if self.pruning && alpha >= beta {
                self.prunes += 1;
                self.sink.record(TraceRecord::Pruned {
                    label: label.clone(),
                });
                break;
            }
        }

        Scored { value: best, best_child }
    }
}

/// The same tree searched with and without cutoffs.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub pruned: SearchOutcome,
    pub full: SearchOutcome,
}

impl Comparison {
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.pruned.value.total_cmp(&self.full.value).is_eq()
    }

    #[must_use]
    pub fn visits_saved(&self) -> usize {
        self.full
            .trace
            .visit_count()
            .saturating_sub(self.pruned.trace.visit_count())
    }
}

pub struct MinimaxEngine {
    config: Arc<EngineConfig>,
}

impl MinimaxEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.config = config;
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Searches with the depth, player and pruning flag from the config.
    pub fn run(&mut self, tree: &TreeNode) -> Result<SearchOutcome> {
        let params = SearchParams::from(self.config.as_ref());
        self.search(tree, &params)
    }

    /// Runs `params` twice, once with pruning and once without.
    pub fn compare(&mut self, tree: &TreeNode, params: &SearchParams) -> Result<Comparison> {
        let pruned = self.search(
            tree,
            &SearchParams {
                pruning: true,
                ..*params
            },
        )?;
        let full = self.search(
            tree,
            &SearchParams {
                pruning: false,
                ..*params
            },
        )?;
        let comparison = Comparison { pruned, full };
        if !comparison.agrees() {
            log::warn!(
                "pruned value {} differs from full value {}",
                comparison.pruned.value,
                comparison.full.value
            );
        }
        Ok(comparison)
    }
}

impl Searcher for MinimaxEngine {
    fn search(&mut self, tree: &TreeNode, params: &SearchParams) -> Result<SearchOutcome> {
        if self.config.missing_value == MissingValuePolicy::Reject {
            let paths = validate::unresolved(tree, params.depth);
            if !paths.is_empty() {
                return Err(GameTreeError::UnresolvedNodes {
                    depth: params.depth,
                    paths,
                });
            }
        }

        let start = Instant::now();
        let mut trace = if self.config.emit_log {
            TraceLog::mirrored()
        } else {
            TraceLog::new()
        };

        let (scored, nodes, visits, prunes) = {
            let mut walk = Walk::new(&mut trace, params.pruning);
            let scored = walk.alpha_beta(
                Some(tree),
                params.depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                params.player.is_maximizing(),
            );
            (scored, walk.nodes, walk.visits, walk.prunes)
        };

        let best_label = scored
            .best_child
            .and_then(|index| tree.children().get(index))
            .map(|(label, _)| label.clone());

        let stats = SearchStats {
            depth: params.depth.max(0),
            nodes,
            visits,
            prunes,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        log::debug!(
            "search depth={} player={:?} pruning={} -> value={} best={:?} nodes={} prunes={}",
            params.depth,
            params.player,
            params.pruning,
            scored.value,
            best_label,
            stats.nodes,
            stats.prunes
        );

        Ok(SearchOutcome {
            value: scored.value,
            best_label,
            trace,
            stats,
        })
    }
}
