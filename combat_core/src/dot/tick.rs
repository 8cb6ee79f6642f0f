//! Tick application - apply a combined HP + posture tick to one actor
//!
//! Shared rules:
//! - HP never drops below 0.
//! - While broken or superbroken, posture is pinned at 0.
//! - Otherwise posture damage from a tick never takes posture below 1; only
//!   the break mechanic moves posture to 0.
//! - Dead enemies are not changed; an enemy reaching 0 HP becomes dead.

use super::stack::DotResolution;
use crate::config::DamageReductionConstants;
use crate::defense::compute_damage_taken;
use crate::sanitize::{floor_non_negative, non_negative};
use crate::types::{Enemy, EnemyState, Player, PlayerStatus};
use serde::{Deserialize, Serialize};

/// Tick input for the player
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerTickInput {
    pub hp_damage: f64,
    pub posture_damage: f64,
    pub hp: f64,
    pub posture: f64,
    pub status: Option<PlayerStatus>,
    pub damage_reduction_percent: Option<f64>,
}

/// Tick input for an enemy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyTickInput {
    pub hp_damage: f64,
    pub posture_damage: f64,
    pub hp: f64,
    pub posture: f64,
    pub state: EnemyState,
}

/// Player pools after a tick and the deltas applied
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerTickResult {
    pub next_hp: f64,
    pub next_posture: f64,
    pub hp_applied: f64,
    pub posture_loss: f64,
}

/// Enemy pools and state after a tick and the deltas applied
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyTickResult {
    pub next_hp: f64,
    pub next_posture: f64,
    pub hp_applied: f64,
    pub posture_loss: f64,
    pub next_state: EnemyState,
}

/// Apply a tick to the player. HP damage goes through damage reduction.
///
/// Current `hp` and `posture` are sanitized (non-finite or negative becomes 0)
/// before any branch, so a no-op tick returns the sanitized pools.
/// A missing `status` counts as `Normal`.
pub fn apply_dot_tick_to_player(
    input: &PlayerTickInput,
    constants: &DamageReductionConstants,
) -> PlayerTickResult {
    let hp = non_negative(input.hp);
    let posture = non_negative(input.posture);
    let hp_damage = compute_damage_taken(input.hp_damage, input.damage_reduction_percent, constants);
    let posture_damage = floor_non_negative(input.posture_damage);

    if hp_damage <= 0.0 && posture_damage <= 0.0 {
        return PlayerTickResult {
            next_hp: hp,
            next_posture: posture,
            hp_applied: 0.0,
            posture_loss: 0.0,
        };
    }

    let broken = input.status.unwrap_or_default().is_broken();
    let (next_hp, next_posture) = next_pools(hp, posture, hp_damage, posture_damage, broken);

    PlayerTickResult {
        next_hp,
        next_posture,
        hp_applied: hp - next_hp,
        posture_loss: (posture - next_posture).max(0.0),
    }
}

/// Apply a tick to an enemy, transitioning it to dead at 0 HP.
///
/// Current `hp` and `posture` are sanitized (non-finite or negative becomes 0)
/// before any branch, so a no-op or dead-target tick returns the sanitized pools.
pub fn apply_dot_tick_to_enemy(input: &EnemyTickInput) -> EnemyTickResult {
    let hp = non_negative(input.hp);
    let posture = non_negative(input.posture);
    let hp_damage = floor_non_negative(input.hp_damage);
    let posture_damage = floor_non_negative(input.posture_damage);

    if input.state.is_dead() || (hp_damage <= 0.0 && posture_damage <= 0.0) {
        return EnemyTickResult {
            next_hp: hp,
            next_posture: posture,
            hp_applied: 0.0,
            posture_loss: 0.0,
            next_state: input.state,
        };
    }

    let (next_hp, next_posture) =
        next_pools(hp, posture, hp_damage, posture_damage, input.state.is_broken());
    let next_state = if next_hp <= 0.0 {
        tracing::debug!("Enemy killed by DoT tick ({} hp damage)", hp_damage);
        EnemyState::Dead
    } else {
        input.state
    };

    EnemyTickResult {
        next_hp,
        next_posture,
        hp_applied: hp - next_hp,
        posture_loss: (posture - next_posture).max(0.0),
        next_state,
    }
}

fn next_pools(
    hp: f64,
    posture: f64,
    hp_damage: f64,
    posture_damage: f64,
    broken: bool,
) -> (f64, f64) {
    let next_hp = (hp - hp_damage).max(0.0);
    let next_posture = if broken {
        0.0
    } else if posture_damage > 0.0 {
        // Floor of 1, but never above where posture started
        (posture - posture_damage).max(1.0).min(posture)
    } else {
        posture
    };
    (next_hp, next_posture)
}

/// Apply a resolved DoT tick to the live player state
pub fn tick_player(
    player: &mut Player,
    resolution: &DotResolution,
    constants: &DamageReductionConstants,
) -> PlayerTickResult {
    let input = PlayerTickInput {
        hp_damage: resolution.total_hp_damage,
        posture_damage: resolution.total_posture_damage,
        hp: player.attributes.hp,
        posture: player.attributes.posture,
        status: Some(player.status),
        damage_reduction_percent: player.attributes.damage_reduction_percent,
    };
    let result = apply_dot_tick_to_player(&input, constants);
    player.attributes.hp = result.next_hp;
    player.attributes.posture = result.next_posture;
    tracing::debug!(
        "DoT tick on {}: {} stacks, -{} hp, -{} posture",
        player.id,
        resolution.stack_count,
        result.hp_applied,
        result.posture_loss
    );
    result
}

/// Apply a resolved DoT tick to the live enemy state
pub fn tick_enemy(enemy: &mut Enemy, resolution: &DotResolution) -> EnemyTickResult {
    let input = EnemyTickInput {
        hp_damage: resolution.total_hp_damage,
        posture_damage: resolution.total_posture_damage,
        hp: enemy.attributes.hp,
        posture: enemy.attributes.posture,
        state: enemy.state,
    };
    let result = apply_dot_tick_to_enemy(&input);
    enemy.attributes.hp = result.next_hp;
    enemy.attributes.posture = result.next_posture;
    enemy.state = result.next_state;
    tracing::debug!(
        "DoT tick on {}: {} stacks, -{} hp, -{} posture",
        enemy.id,
        resolution.stack_count,
        result.hp_applied,
        result.posture_loss
    );
    result
}
