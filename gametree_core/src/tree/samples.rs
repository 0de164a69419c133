//! Worked example trees with hand-checked minimax values.
//!
//! | tree     | depth | root | value |
//! |----------|-------|------|-------|
//! | `simple` | 3     | max  | 1     |
//! | `simple` | 3     | min  | 2     |
//! | `wide`   | 4     | max  | 2     |
//! | `wide`   | 4     | min  | 8     |
//! | `wide`   | 3     | any  | 0     |

use crate::tree::node::TreeNode;

fn pair(a: (&str, f64), b: (&str, f64)) -> TreeNode {
    TreeNode::internal([(a.0, TreeNode::leaf(a.1)), (b.0, TreeNode::leaf(b.1))])
}

/// `{A: {B: {D: 0, E: 1}, C: {F: 5, G: 2}}}`
#[must_use]
pub fn simple() -> TreeNode {
    let b = pair(("D", 0.0), ("E", 1.0));
    let c = pair(("F", 5.0), ("G", 2.0));
    TreeNode::internal([("A", TreeNode::internal([("B", b), ("C", c)]))])
}

/// Root `A` with three subtrees `B`, `C`, `D` over two more plies of
/// internal nodes (`E`..`K`) and fourteen leaves (`L`..`Y`).
#[must_use]
pub fn wide() -> TreeNode {
    let b = TreeNode::internal([
        ("E", pair(("L", 2.0), ("M", 3.0))),
        ("F", pair(("N", 8.0), ("O", 5.0))),
        ("G", pair(("P", 7.0), ("Q", 6.0))),
    ]);
    let c = TreeNode::internal([
        ("H", pair(("R", 0.0), ("S", 1.0))),
        ("I", pair(("T", 5.0), ("U", 2.0))),
    ]);
    let d = TreeNode::internal([
        ("J", pair(("V", 8.0), ("W", 4.0))),
        ("K", pair(("X", 10.0), ("Y", 2.0))),
    ]);
    TreeNode::internal([("A", TreeNode::internal([("B", b), ("C", c), ("D", d)]))])
}

/// Looks a sample up by name, for command-line use.
#[must_use]
pub fn by_name(name: &str) -> Option<TreeNode> {
    match name {
        "simple" => Some(simple()),
        "wide" => Some(wide()),
        _ => None,
    }
}
