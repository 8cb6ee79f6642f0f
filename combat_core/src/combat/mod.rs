//! Combat resolution - hit counts, resonance bonuses, posture overkill and
//! the per-action pipeline that ties them together

mod action;
pub mod hit_count;
mod posture;
pub mod resonance;

pub use action::{resolve_action, ActionOutcome, ActionRequest, HitOutcome};
pub use hit_count::{clamp_hit_count, resolve_hit_count, HitContext, MAX_HIT_COUNT, MIN_HIT_COUNT};
pub use posture::PostureOverkillTracker;
pub use resonance::{
    has_sentinel_path, is_resonance_active, resolve_sentinel_hit_count_bonus, ResonanceContext,
};
