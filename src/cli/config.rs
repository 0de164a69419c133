use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gametree_core::engine::config::MissingValuePolicy;
use gametree_core::{EngineConfig, Player, TreeNode};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `Node: <label>, Alpha: <a>, Beta: <b>` lines
    Wire,
    /// `Node: <label> - <value>, Best: <best>` lines
    Values,
    /// Trace, value and stats as JSON
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Max,
    Min,
}

#[derive(Parser, Debug)]
#[command(name = "gametree")]
#[command(version, about = "Trace minimax and alpha-beta search over a declared game tree", long_about = None)]
pub struct Args {
    /// JSON file holding the tree literal
    pub tree: Option<PathBuf>,

    /// Built-in tree to search instead of a file (`simple` or `wide`)
    #[arg(long, conflicts_with = "tree")]
    pub sample: Option<String>,

    /// Search a random tree generated from this seed
    #[arg(long, conflicts_with_all = ["tree", "sample"])]
    pub random_seed: Option<u64>,

    /// Height of the random tree (at most 16)
    #[arg(long, default_value_t = 4)]
    pub random_height: u32,

    /// JSON engine config; the flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Plies to search (defaults to the tree height unless a config sets it)
    #[arg(long, short = 'd', allow_negative_numbers = true)]
    pub depth: Option<i32>,

    /// Side to move at the root
    #[arg(long, value_enum)]
    pub player: Option<Side>,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long)]
    pub no_prune: bool,

    /// Fail instead of scoring unresolved nodes as 0
    #[arg(long)]
    pub strict: bool,

    /// Run with and without pruning and report both
    #[arg(long)]
    pub compare: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Wire)]
    pub format: Format,
}

impl Args {
    /// Config file (or defaults), then command-line overrides.
    pub fn engine_config(&self, tree: &TreeNode) -> Result<EngineConfig> {
        let height = i32::try_from(tree.height()).unwrap_or(i32::MAX);
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                EngineConfig::load_from_json_with_depth(&text, height)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => EngineConfig {
                depth: height,
                ..EngineConfig::default()
            },
        };

        if let Some(depth) = self.depth {
            if depth < 0 {
                tracing::warn!(depth, "negative depth treated as 0");
            }
            config.depth = depth.max(0);
        }
        if let Some(side) = self.player {
            config.maximizing = Player::from(side).is_maximizing();
        }
        if self.no_prune {
            config.pruning = false;
        }
        if self.strict {
            config.missing_value = MissingValuePolicy::Reject;
        }
        Ok(config)
    }
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Max => Self::Max,
            Side::Min => Self::Min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gametree_core::tree::samples;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gametree").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("bad args {args:?}: {e}"))
    }

    #[test]
    fn test_depth_defaults_to_tree_height() {
        let args = parse(&["--sample", "wide"]);
        let config = args.engine_config(&samples::wide()).unwrap_or_default();
        assert_eq!(config.depth, 4);
        assert!(config.maximizing);
        assert!(config.pruning);
    }

    #[test]
    fn test_flags_override() {
        let args = parse(&[
            "--sample", "simple", "-d", "-2", "--player", "min", "--no-prune", "--strict",
        ]);
        let config = args.engine_config(&samples::simple()).unwrap_or_default();
        assert_eq!(config.depth, 0);
        assert!(!config.maximizing);
        assert!(!config.pruning);
        assert_eq!(config.missing_value, MissingValuePolicy::Reject);
    }

    #[test]
    fn test_config_without_depth_uses_tree_height() {
        let path =
            std::env::temp_dir().join(format!("gametree-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "player": "min" }"#).unwrap_or_else(|e| panic!("{e}"));
        let path_arg = path.to_string_lossy().into_owned();

        let args = parse(&["--sample", "wide", "--config", &path_arg]);
        let config = args.engine_config(&samples::wide());
        let _ = std::fs::remove_file(&path);

        let config = config.unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.depth, 4);
        assert!(!config.maximizing);
    }

    #[test]
    fn test_random_height_is_capped() {
        let args = parse(&["--random-seed", "3", "--random-height", "100000"]);
        let err = super::super::load_tree(&args).map(|_| ()).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn test_sources_conflict() {
        let result = Args::try_parse_from(["gametree", "tree.json", "--sample", "wide"]);
        assert!(result.is_err());
    }
}
