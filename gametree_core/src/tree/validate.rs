use crate::tree::node::TreeNode;

pub const ROOT_PATH: &str = "(root)";

/// Lists nodes that a search to `depth` would score with the neutral value
/// instead of a stored one: childless internal nodes inside the horizon and
/// internal nodes sitting on it. Paths are labels joined by `/`.
#[must_use]
pub fn unresolved(node: &TreeNode, depth: i32) -> Vec<String> {
    let mut paths = Vec::new();
    collect(node, depth, &mut Vec::new(), &mut paths);
    paths
}

fn collect<'a>(node: &'a TreeNode, depth: i32, path: &mut Vec<&'a str>, out: &mut Vec<String>) {
    let TreeNode::Internal(children) = node else {
        return;
    };
    if children.is_empty() || depth <= 0 {
        out.push(if path.is_empty() {
            ROOT_PATH.to_string()
        } else {
            path.join("/")
        });
        return;
    }
    for (label, child) in children {
        path.push(label);
        collect(child, depth - 1, path, out);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::samples;

    #[test]
    fn test_full_depth_resolves_everything() {
        assert!(unresolved(&samples::simple(), 3).is_empty());
        assert!(unresolved(&samples::wide(), 4).is_empty());
        assert!(unresolved(&samples::wide(), 9).is_empty());
    }

    #[test]
    fn test_horizon_nodes_are_reported_in_order() {
        assert_eq!(unresolved(&samples::simple(), 2), vec!["A/B", "A/C"]);
        assert_eq!(unresolved(&samples::simple(), 0), vec![ROOT_PATH]);
    }

    #[test]
    fn test_empty_subtree_is_reported_at_any_depth() {
        let tree = TreeNode::from_json(r#"{"A": {"B": {}, "C": 3}}"#).unwrap();
        assert_eq!(unresolved(&tree, 10), vec!["A/B"]);
        assert_eq!(unresolved(&TreeNode::empty(), 5), vec![ROOT_PATH]);
    }

    #[test]
    fn test_leaf_never_unresolved() {
        assert!(unresolved(&TreeNode::leaf(4.0), 0).is_empty());
        assert!(unresolved(&TreeNode::leaf(4.0), -3).is_empty());
    }
}
