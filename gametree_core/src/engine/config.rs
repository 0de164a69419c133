use serde::{Deserialize, Serialize};

/// What to do with nodes the cutoff rule would score as a neutral `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Score them `0` and carry on.
    #[default]
    Neutral,
    /// Refuse to search a tree that contains any.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Search Parameters
    pub depth: i32,
    pub maximizing: bool,
    pub pruning: bool,

    // Tree Handling
    pub missing_value: MissingValuePolicy,

    // Output
    pub emit_log: bool, // Mirror trace records to the log facade
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            maximizing: true,
            pruning: true,
            missing_value: MissingValuePolicy::Neutral,
            emit_log: false,
        }
    }
}

#[derive(Deserialize)]
struct EngineConfigJson {
    depth: Option<i64>,
    maximizing: Option<bool>,
    player: Option<crate::engine::Player>,
    pruning: Option<bool>,
    missing_value: Option<MissingValuePolicy>,
    emit_log: Option<bool>,
}

impl EngineConfig {
    /// Reads a partial JSON config over the defaults. A negative depth is
    /// clamped to zero; `player` ("max"/"min") overrides `maximizing`.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        Self::load_from_json_with_depth(json_str, Self::default().depth)
    }

    /// Like `load_from_json`, but a missing `depth` becomes `fallback_depth`.
    pub fn load_from_json_with_depth(
        json_str: &str,
        fallback_depth: i32,
    ) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        let maximizing = json_config
            .player
            .map(crate::engine::Player::is_maximizing)
            .or(json_config.maximizing)
            .unwrap_or(default.maximizing);

        Ok(Self {
            depth: json_config.depth.map_or(fallback_depth, clamp_depth),
            maximizing,
            pruning: json_config.pruning.unwrap_or(default.pruning),
            missing_value: json_config.missing_value.unwrap_or(default.missing_value),
            emit_log: json_config.emit_log.unwrap_or(default.emit_log),
        })
    }
}

fn clamp_depth(depth: i64) -> i32 {
    if depth < 0 {
        log::warn!("negative depth {depth} treated as 0");
        return 0;
    }
    i32::try_from(depth).unwrap_or(i32::MAX)
}
