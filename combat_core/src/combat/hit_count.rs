//! Hit count resolution - how many discrete hits an action produces

use super::resonance::{resolve_sentinel_hit_count_bonus, ResonanceContext};
use crate::config::HitCountConstants;
use crate::sanitize::{count_in_range, floor_clamp};
use crate::types::{ActionKind, ActorLookup, ActorRef};
use serde::{Deserialize, Serialize};

/// No action may produce more hits than this
pub const MAX_HIT_COUNT: u32 = 6;
pub const MIN_HIT_COUNT: u32 = 1;

/// Describes one action's hit-count request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HitContext {
    /// Id of the acting actor
    pub source_id: String,
    pub action_kind: ActionKind,
    /// Explicit hit count; bypasses calculation when finite
    pub declared_hit_count: Option<f64>,
    /// Overrides the configured set bonus
    pub set_bonus: Option<f64>,
    /// Overrides the configured resonance bonus
    pub resonance: Option<ResonanceContext>,
}

impl HitContext {
    pub fn new(source_id: impl Into<String>, action_kind: ActionKind) -> Self {
        HitContext {
            source_id: source_id.into(),
            action_kind,
            ..Default::default()
        }
    }

    pub fn with_declared_hit_count(mut self, count: f64) -> Self {
        self.declared_hit_count = Some(count);
        self
    }

    pub fn with_set_bonus(mut self, bonus: f64) -> Self {
        self.set_bonus = Some(bonus);
        self
    }

    pub fn with_resonance(mut self, resonance: ResonanceContext) -> Self {
        self.resonance = Some(resonance);
        self
    }
}

/// Resolve the number of hits for an action, always within `[1, 6]`
pub fn resolve_hit_count(
    ctx: &HitContext,
    actors: &impl ActorLookup,
    constants: &HitCountConstants,
) -> u32 {
    if let Some(declared) = ctx.declared_hit_count.filter(|v| v.is_finite()) {
        let count = clamp_hit_count(declared);
        if f64::from(count) != declared {
            tracing::debug!(
                "Declared hit count {} for {} clamped to {}",
                declared,
                ctx.source_id,
                count
            );
        }
        return count;
    }

    match actors.actor(&ctx.source_id) {
        Some(ActorRef::Player(_)) => {
            let set_bonus = clamp_bonus(ctx.set_bonus.unwrap_or(constants.set_bonus));
            let resonance_bonus = match &ctx.resonance {
                Some(resonance) => f64::from(resolve_sentinel_hit_count_bonus(resonance)),
                None => clamp_bonus(constants.resonance_bonus),
            };
            clamp_hit_count(1.0 + set_bonus + resonance_bonus)
        }
        Some(ActorRef::Enemy(enemy)) => {
            clamp_hit_count(enemy.attributes.base_hit_count.unwrap_or(1.0))
        }
        None => {
            tracing::trace!(
                "Unknown hit source {} ({:?}), defaulting to one hit",
                ctx.source_id,
                ctx.action_kind
            );
            MIN_HIT_COUNT
        }
    }
}

/// Bonus hits floored into `[0, 6]`; non-finite becomes 0
fn clamp_bonus(value: f64) -> f64 {
    floor_clamp(value, 0.0, f64::from(MAX_HIT_COUNT))
}

/// Floor and clamp into `[1, 6]`; non-finite becomes 1
pub fn clamp_hit_count(value: f64) -> u32 {
    count_in_range(value, MIN_HIT_COUNT, MAX_HIT_COUNT)
}
