//! Seeded random trees for sweeping search properties.

use crate::error::{GameTreeError, Result};
use crate::tree::node::TreeNode;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tallest tree the generator will build. Generation recurses once per ply.
pub const MAX_RANDOM_HEIGHT: u32 = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomTreeSpec {
    pub height: u32,
    pub min_children: usize,
    pub max_children: usize,
    pub min_value: i32,
    pub max_value: i32,
    /// Chance that a node below the root stops early as a leaf.
    pub leaf_probability: f64,
}

impl Default for RandomTreeSpec {
    fn default() -> Self {
        Self {
            height: 4,
            min_children: 1,
            max_children: 3,
            min_value: -10,
            max_value: 10,
            leaf_probability: 0.0,
        }
    }
}

impl RandomTreeSpec {
    pub fn validate(&self) -> Result<()> {
        if self.height > MAX_RANDOM_HEIGHT {
            return Err(GameTreeError::InvalidRandomSpec {
                message: format!(
                    "height {} exceeds the maximum of {MAX_RANDOM_HEIGHT}",
                    self.height
                ),
            });
        }
        if self.min_children > self.max_children {
            return Err(GameTreeError::InvalidRandomSpec {
                message: format!(
                    "min_children {} exceeds max_children {}",
                    self.min_children, self.max_children
                ),
            });
        }
        if self.min_value > self.max_value {
            return Err(GameTreeError::InvalidRandomSpec {
                message: format!(
                    "min_value {} exceeds max_value {}",
                    self.min_value, self.max_value
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.leaf_probability) {
            return Err(GameTreeError::InvalidRandomSpec {
                message: format!("leaf_probability {} is outside 0..=1", self.leaf_probability),
            });
        }
        Ok(())
    }
}

/// Generates a tree no taller than `spec.height`. Labels are `n1`, `n2`, ...
/// in depth-first order, so equal seeds give equal trees.
pub fn random_tree<R: Rng + ?Sized>(spec: &RandomTreeSpec, rng: &mut R) -> Result<TreeNode> {
    spec.validate()?;
    let mut next_label = 0_u32;
    Ok(grow(spec, spec.height, true, rng, &mut next_label))
}

fn grow<R: Rng + ?Sized>(
    spec: &RandomTreeSpec,
    height: u32,
    is_root: bool,
    rng: &mut R,
    next_label: &mut u32,
) -> TreeNode {
    let stop_early = !is_root && rng.gen_bool(spec.leaf_probability);
    if height == 0 || stop_early {
        return TreeNode::leaf(f64::from(rng.gen_range(spec.min_value..=spec.max_value)));
    }
    let count = rng.gen_range(spec.min_children..=spec.max_children);
    let mut children = Vec::with_capacity(count);
    for _ in 0..count {
        *next_label += 1;
        let label = format!("n{next_label}");
        children.push((label, grow(spec, height - 1, false, rng, next_label)));
    }
    TreeNode::Internal(children)
}
