use gametree_core::tree::random::{random_tree, RandomTreeSpec};
use gametree_core::{
    evaluate, EngineConfig, MinimaxEngine, Player, SearchParams, Searcher, TraceLog, TreeNode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

// Straight recursion with no window and no depth limit.
fn reference_value(node: &TreeNode, maximizing: bool) -> f64 {
    match node {
        TreeNode::Leaf(value) => *value,
        TreeNode::Internal(children) if children.is_empty() => 0.0,
        TreeNode::Internal(children) => {
            let values = children
                .iter()
                .map(|(_, child)| reference_value(child, !maximizing));
            if maximizing {
                values.fold(f64::NEG_INFINITY, f64::max)
            } else {
                values.fold(f64::INFINITY, f64::min)
            }
        }
    }
}

fn trees(seed: u64, count: usize) -> Vec<TreeNode> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let spec = RandomTreeSpec {
                height: rng.gen_range(1..=5),
                min_children: rng.gen_range(0..=1),
                max_children: rng.gen_range(1..=4),
                min_value: -20,
                max_value: 20,
                leaf_probability: rng.gen_range(0.0..0.4),
            };
            random_tree(&spec, &mut rng).unwrap()
        })
        .collect()
}

fn search(tree: &TreeNode, depth: i32, player: Player, pruning: bool) -> (f64, TraceLog) {
    let mut engine = MinimaxEngine::new(Arc::new(EngineConfig::default()));
    let outcome = engine
        .search(
            tree,
            &SearchParams {
                depth,
                player,
                pruning,
            },
        )
        .unwrap();
    (outcome.value, outcome.trace)
}

#[test]
fn test_pruning_preserves_value() {
    for tree in trees(42, 200) {
        let height = i32::try_from(tree.height()).unwrap();
        for depth in 0..=height + 1 {
            for player in [Player::Max, Player::Min] {
                let (pruned, _) = search(&tree, depth, player, true);
                let (full, _) = search(&tree, depth, player, false);
                assert_eq!(pruned, full, "depth {depth}, {player:?}, tree {tree:?}");
            }
        }
    }
}

#[test]
fn test_pruning_never_adds_visits() {
    for tree in trees(7, 200) {
        let height = i32::try_from(tree.height()).unwrap();
        for depth in 1..=height {
            for player in [Player::Max, Player::Min] {
                let (_, pruned) = search(&tree, depth, player, true);
                let (_, full) = search(&tree, depth, player, false);
                assert!(pruned.visit_count() <= full.visit_count());
                assert_eq!(full.prune_count(), 0);
            }
        }
    }
}

#[test]
fn test_depth_saturation() {
    for tree in trees(1234, 150) {
        let height = i32::try_from(tree.height()).unwrap();
        for player in [Player::Max, Player::Min] {
            let expected = reference_value(&tree, player.is_maximizing());
            for extra in 0..3 {
                let (value, _) = search(&tree, height + extra, player, true);
                assert_eq!(value, expected);
            }
        }
    }
}

#[test]
fn test_unpruned_trace_visits_every_child() {
    for tree in trees(99, 50) {
        let depth = i32::try_from(tree.height()).unwrap();
        let (_, full) = search(&tree, depth, Player::Max, false);
        assert_eq!(full.visit_count(), tree.node_count() - 1);
    }
}

#[test]
fn test_terminal_passthrough() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let value = f64::from(rng.gen_range(-1000..=1000)) / 8.0;
        let depth = rng.gen_range(-3..=10);
        let mut log = TraceLog::new();
        let result = evaluate(
            Some(&TreeNode::leaf(value)),
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
            &mut log,
        );
        assert_eq!(result, value);
        assert!(log.is_empty());
    }
}

#[test]
fn test_independent_searches_share_tree() {
    let tree = trees(3, 1).remove(0);
    let depth = i32::try_from(tree.height()).unwrap();
    let before = tree.clone();

    let handles: Vec<_> = [true, false]
        .into_iter()
        .map(|pruning| {
            let tree = tree.clone();
            std::thread::spawn(move || search(&tree, depth, Player::Min, pruning).0)
        })
        .collect();
    let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(values[0], values[1]);
    assert_eq!(tree, before);
}
