//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Actors
pub use crate::types::{
    ActionKind, ActorLookup, ActorRef, Combatants, Enemy, EnemyAttributes, EnemyState, Player,
    PlayerAttributes, PlayerStatus, Side,
};

// Combat
pub use crate::combat::{
    resolve_action, resolve_hit_count, ActionOutcome, ActionRequest, HitContext, HitOutcome,
    PostureOverkillTracker, ResonanceContext, MAX_HIT_COUNT,
};

// Damage and defense
pub use crate::damage::{apply_multi_hit_hp_scalar, apply_multi_hit_posture_scalar};
pub use crate::defense::compute_damage_taken;

// DoT system
pub use crate::dot::{
    apply_dot_tick_to_enemy, apply_dot_tick_to_player, resolve_dot_stacks, tick_enemy,
    tick_player, DotResolution, DotStack,
};

// Config
pub use crate::config::{CombatConfig, ConfigError};

// RNG
pub use crate::rng::SeededRng;
