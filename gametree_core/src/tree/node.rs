use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A position in a declared game tree.
///
/// `Internal` keeps its children in declaration order. That order is the
/// traversal order, so it decides which branches a cutoff skips.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf(f64),
    Internal(Vec<(String, TreeNode)>),
}

impl Default for TreeNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl TreeNode {
    /// `-0.0` is stored as `0.0` so traces never print `-0`.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        Self::Leaf(value + 0.0)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::Internal(Vec::new())
    }

    /// Builds an internal node from labelled children, keeping their order.
    /// A repeated label replaces the earlier child in its original slot.
    pub fn internal<I, L>(children: I) -> Self
    where
        I: IntoIterator<Item = (L, TreeNode)>,
        L: Into<String>,
    {
        let mut slots = Vec::new();
        for (label, child) in children {
            insert_child(&mut slots, label.into(), child);
        }
        Self::Internal(slots)
    }

    /// Parses a nested JSON object: objects are internal nodes in document
    /// order, numbers are leaves and `null` is an empty subtree.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// A leaf, or an internal node without children.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Leaf(_) => true,
            Self::Internal(children) => children.is_empty(),
        }
    }

    /// The stored utility. Internal nodes have none, even when childless.
    #[must_use]
    pub fn terminal_value(&self) -> Option<f64> {
        match self {
            Self::Leaf(value) => Some(*value),
            Self::Internal(_) => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[(String, TreeNode)] {
        match self {
            Self::Leaf(_) => &[],
            Self::Internal(children) => children,
        }
    }

    #[must_use]
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children()
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, node)| node)
    }

    /// Number of plies on the longest root-to-terminal path.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|(_, child)| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal(children) => children.iter().map(|(_, c)| c.leaf_count()).sum(),
        }
    }
}

fn insert_child(slots: &mut Vec<(String, TreeNode)>, label: String, child: TreeNode) {
    if let Some(slot) = slots.iter_mut().find(|(l, _)| *l == label) {
        slot.1 = child;
    } else {
        slots.push((label, child));
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(value) => serializer.serialize_f64(*value),
            Self::Internal(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (label, child) in children {
                    map.serialize_entry(label, child)?;
                }
                map.end()
            }
        }
    }
}

struct TreeNodeVisitor;

impl<'de> Visitor<'de> for TreeNodeVisitor {
    type Value = TreeNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, null, or a map of labels to subtrees")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TreeNode, E> {
        Ok(TreeNode::leaf(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TreeNode, E> {
        Ok(TreeNode::Leaf(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TreeNode, E> {
        Ok(TreeNode::Leaf(v as f64))
    }

    fn visit_unit<E: de::Error>(self) -> Result<TreeNode, E> {
        Ok(TreeNode::empty())
    }

    fn visit_none<E: de::Error>(self) -> Result<TreeNode, E> {
        Ok(TreeNode::empty())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TreeNode, A::Error> {
        let mut slots = Vec::new();
        while let Some((label, child)) = access.next_entry::<String, TreeNode>()? {
            insert_child(&mut slots, label, child);
        }
        Ok(TreeNode::Internal(slots))
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TreeNodeVisitor)
    }
}
