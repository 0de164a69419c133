//! Command-line front end: load a tree, search it, print the trace.

use anyhow::{anyhow, bail, Context, Result};
use gametree_core::tree::random::{random_tree, RandomTreeSpec};
use gametree_core::tree::samples;
use gametree_core::{MinimaxEngine, SearchParams, TreeNode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;

mod config;
mod output;

pub use config::Args;

pub fn run(args: &Args) -> Result<()> {
    let tree = load_tree(args)?;
    let config = args.engine_config(&tree)?;
    tracing::info!(
        depth = config.depth,
        maximizing = config.maximizing,
        pruning = config.pruning,
        nodes = tree.node_count(),
        height = tree.height(),
        "searching tree"
    );

    let mut engine = MinimaxEngine::new(Arc::new(config));
    let mut out = io::stdout().lock();

    if args.compare {
        let params = SearchParams::from(engine.config());
        let comparison = engine.compare(&tree, &params)?;
        output::write_comparison(&mut out, &comparison, args.format)?;
    } else {
        let outcome = engine.run(&tree)?;
        output::write_outcome(&mut out, &outcome, args.format)?;
    }
    out.flush()?;
    Ok(())
}

fn load_tree(args: &Args) -> Result<TreeNode> {
    if let Some(path) = &args.tree {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read tree file {}", path.display()))?;
        return TreeNode::from_json(&text)
            .with_context(|| format!("failed to parse tree file {}", path.display()));
    }
    if let Some(name) = &args.sample {
        return samples::by_name(name)
            .ok_or_else(|| anyhow!("unknown sample '{name}' (expected 'simple' or 'wide')"));
    }
    if let Some(seed) = args.random_seed {
        let spec = RandomTreeSpec {
            height: args.random_height,
            ..Default::default()
        };
        tracing::debug!(seed, height = spec.height, "generating random tree");
        return Ok(random_tree(&spec, &mut StdRng::seed_from_u64(seed))?);
    }
    bail!("no tree given: pass a JSON file, --sample or --random-seed")
}
