//! Resonance - build affiliation predicates and the bonuses they unlock

use serde::{Deserialize, Serialize};

/// Path identifier that unlocks the resonance hit-count bonus
pub const SENTINEL_PATH: &str = "Sentinel";

/// Extra hits granted by an active Sentinel resonance
pub const SENTINEL_HIT_COUNT_BONUS: u32 = 2;

/// Build affiliation flags for the acting player
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonanceContext {
    pub resonance_active: bool,
    pub origin_path_id: Option<String>,
    pub run_path_id: Option<String>,
}

impl ResonanceContext {
    /// Inactive context with no paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resonance-active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.resonance_active = active;
        self
    }

    /// Set the origin path id
    pub fn with_origin_path(mut self, path: impl Into<String>) -> Self {
        self.origin_path_id = Some(path.into());
        self
    }

    /// Set the current run's path id
    pub fn with_run_path(mut self, path: impl Into<String>) -> Self {
        self.run_path_id = Some(path.into());
        self
    }
}

/// Resonance flag is set
pub fn is_resonance_active(ctx: &ResonanceContext) -> bool {
    ctx.resonance_active
}

/// Either the origin path or the run path is Sentinel
pub fn has_sentinel_path(ctx: &ResonanceContext) -> bool {
    [&ctx.origin_path_id, &ctx.run_path_id]
        .into_iter()
        .any(|path| path.as_deref() == Some(SENTINEL_PATH))
}

/// Bonus hits from resonance: 2 only when resonance is active on a Sentinel build
pub fn resolve_sentinel_hit_count_bonus(ctx: &ResonanceContext) -> u32 {
    if is_resonance_active(ctx) && has_sentinel_path(ctx) {
        SENTINEL_HIT_COUNT_BONUS
    } else {
        0
    }
}
