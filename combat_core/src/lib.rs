//! combat_core - Deterministic combat resolution for turn-based encounters
//!
//! This library provides:
//! - Hit count resolution with resonance bonuses and a hard cap of 6 hits
//! - Multi-hit damage scaling with diminishing returns
//! - Damage reduction with a guaranteed minimum of 1
//! - Posture overkill tracking per action
//! - DoT stack aggregation and HP/posture tick application
//!
//! None of the combat functions fail: malformed numbers are sanitized to safe
//! defaults. Only configuration loading returns errors.
//!
//! # Quick Start
//!
//! ```rust
//! use combat_core::prelude::*;
//!
//! let config = CombatConfig::default();
//! let player = Player::new("hero", PlayerAttributes::with_pools(100.0, 30.0));
//! let enemy = Enemy::new("wolf", EnemyAttributes::with_pools(80.0, 20.0));
//! let mut rng = SeededRng::new(12345).fork("gameplay");
//!
//! let request = ActionRequest {
//!     context: HitContext::new("hero", ActionKind::Skill),
//!     target: Side::Enemy,
//!     base_damage: 25.0,
//!     base_posture_damage: 6.0,
//! };
//! let outcome = resolve_action(&request, &Combatants::new(&player, &enemy), &config, &mut rng);
//! assert_eq!(outcome.hit_count, 1);
//! assert_eq!(outcome.next_hp, 55.0);
//! ```

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod dot;
pub mod prelude;
pub mod rng;
pub mod sanitize;
pub mod types;

// Core API - what most users need
pub use combat::{resolve_action, resolve_hit_count, ActionOutcome, ActionRequest, HitContext};
pub use config::{CombatConfig, ConfigError};
pub use dot::{resolve_dot_stacks, DotResolution, DotStack};
pub use rng::SeededRng;
pub use types::{
    ActionKind, ActorLookup, ActorRef, Combatants, Enemy, EnemyAttributes, EnemyState, Player,
    PlayerAttributes, PlayerStatus, Side,
};
