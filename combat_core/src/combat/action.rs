//! Action resolution - run one attack or skill against a target
//!
//! Pipeline per action:
//! 1. Resolve the hit count for the acting source
//! 2. Scale base damage by the attacker's bonus percentages
//! 3. Per hit: crit roll, multi-hit scalars, player damage reduction
//! 4. Posture damage of every hit goes through one overkill tracker
//!
//! Nothing is mutated; the outcome carries the next HP/posture for the
//! controller to write back (see [`ActionOutcome::apply_to_player`] and
//! [`ActionOutcome::apply_to_enemy`]).

use super::hit_count::{resolve_hit_count, HitContext};
use super::posture::PostureOverkillTracker;
use crate::config::CombatConfig;
use crate::damage::{apply_multi_hit_hp_scalar, apply_multi_hit_posture_scalar};
use crate::defense::compute_damage_taken;
use crate::rng::SeededRng;
use crate::sanitize::{finite_or, non_negative};
use crate::types::{ActorLookup, ActorRef, Combatants, Enemy, EnemyState, Player, Side};
use serde::{Deserialize, Serialize};

/// One attack or skill aimed at a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub context: HitContext,
    pub target: Side,
    /// HP damage of a single undiminished hit
    pub base_damage: f64,
    /// Posture damage of a single undiminished hit
    #[serde(default)]
    pub base_posture_damage: f64,
}

/// Damage dealt by one hit of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitOutcome {
    /// 0-based position within the action
    pub index: u32,
    pub hp_damage: f64,
    /// Posture damage that counted after the overkill cap
    pub posture_damage: f64,
    pub critical: bool,
}

/// Result of resolving one action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub target: Side,
    pub hit_count: u32,
    pub hits: Vec<HitOutcome>,
    pub total_hp_damage: f64,
    pub total_posture_damage: f64,
    pub overkill: f64,
    pub next_hp: f64,
    pub next_posture: f64,
    /// Target's posture pool went from positive to 0 during this action
    pub posture_depleted: bool,
    /// Next state when the target is an enemy
    pub next_enemy_state: Option<EnemyState>,
}

impl ActionOutcome {
    /// Write the outcome into the player's live state
    pub fn apply_to_player(&self, player: &mut Player) {
        if self.target != Side::Player {
            return;
        }
        player.attributes.hp = self.next_hp;
        player.attributes.posture = self.next_posture;
    }

    /// Write the outcome into the enemy's live state
    pub fn apply_to_enemy(&self, enemy: &mut Enemy) {
        if self.target != Side::Enemy {
            return;
        }
        enemy.attributes.hp = self.next_hp;
        enemy.attributes.posture = self.next_posture;
        if let Some(state) = self.next_enemy_state {
            enemy.state = state;
        }
    }

    pub fn critical_hits(&self) -> usize {
        self.hits.iter().filter(|hit| hit.critical).count()
    }
}

/// Defender values read once at the start of an action
struct DefenderSnapshot {
    hp: f64,
    posture: f64,
    max_posture: f64,
    broken: bool,
    state: Option<EnemyState>,
    damage_reduction_percent: Option<f64>,
}

impl DefenderSnapshot {
    fn of(actor: ActorRef<'_>) -> Self {
        match actor {
            ActorRef::Player(p) => DefenderSnapshot {
                hp: non_negative(p.attributes.hp),
                posture: non_negative(p.attributes.posture),
                max_posture: non_negative(p.attributes.max_posture),
                broken: p.status.is_broken(),
                state: None,
                damage_reduction_percent: p.attributes.damage_reduction_percent,
            },
            ActorRef::Enemy(e) => DefenderSnapshot {
                hp: non_negative(e.attributes.hp),
                posture: non_negative(e.attributes.posture),
                max_posture: non_negative(e.attributes.max_posture),
                broken: e.state.is_broken(),
                state: Some(e.state),
                damage_reduction_percent: None,
            },
        }
    }
}

/// Resolve an action against its target
pub fn resolve_action(
    request: &ActionRequest,
    combatants: &Combatants<'_>,
    config: &CombatConfig,
    rng: &mut SeededRng,
) -> ActionOutcome {
    let hit_count = resolve_hit_count(&request.context, combatants, &config.hit_count);
    let defender = DefenderSnapshot::of(combatants.side(request.target));

    let mut outcome = ActionOutcome {
        target: request.target,
        hit_count,
        hits: Vec::with_capacity(hit_count as usize),
        total_hp_damage: 0.0,
        total_posture_damage: 0.0,
        overkill: 0.0,
        next_hp: defender.hp,
        next_posture: if defender.broken { 0.0 } else { defender.posture },
        posture_depleted: false,
        next_enemy_state: defender.state,
    };

    if defender.state.is_some_and(EnemyState::is_dead) {
        tracing::debug!("Action from {} hit a dead target", request.context.source_id);
        return outcome;
    }

    let attacker = combatants.actor(&request.context.source_id);
    let (damage_mult, posture_mult) = match attacker {
        Some(ActorRef::Player(p)) => (
            bonus_multiplier(p.attributes.damage_bonus_percent),
            bonus_multiplier(p.attributes.posture_damage_bonus_percent),
        ),
        _ => (1.0, 1.0),
    };
    let crit_chance = attacker.map(|a| a.crit_chance()).unwrap_or(0.0);
    let crit_mult = 1.0 + non_negative(attacker.map(|a| a.crit_damage()).unwrap_or(0.0)) / 100.0;

    let base_damage = non_negative(request.base_damage) * damage_mult;
    let base_posture = non_negative(request.base_posture_damage) * posture_mult;

    let start_posture = if defender.broken { 0.0 } else { defender.posture };
    let mut tracker = PostureOverkillTracker::new(
        defender.max_posture,
        start_posture,
        config.posture.overkill_cap_fraction,
    );

    for index in 0..hit_count {
        let position = index as usize;
        let critical = rng.roll_percent(crit_chance);
        let hit_damage = if critical { base_damage * crit_mult } else { base_damage };

        let scaled = apply_multi_hit_hp_scalar(hit_damage, position, &config.multi_hit);
        let hp_damage = match request.target {
            Side::Player => compute_damage_taken(
                scaled,
                defender.damage_reduction_percent,
                &config.damage_reduction,
            ),
            Side::Enemy => scaled,
        };

        let posture_raw = apply_multi_hit_posture_scalar(base_posture, position, &config.multi_hit);
        let posture_damage = tracker.apply(posture_raw);

        tracing::trace!(
            "Hit {}/{}: {} hp{} / {} posture",
            index + 1,
            hit_count,
            hp_damage,
            if critical { " (crit)" } else { "" },
            posture_damage
        );

        outcome.total_hp_damage += hp_damage;
        outcome.total_posture_damage += posture_damage;
        outcome.hits.push(HitOutcome {
            index,
            hp_damage,
            posture_damage,
            critical,
        });
    }

    outcome.overkill = tracker.overkill();
    outcome.next_hp = (defender.hp - outcome.total_hp_damage).max(0.0);
    if !defender.broken {
        let pool = start_posture.floor();
        outcome.posture_depleted = pool > 0.0 && tracker.remaining() <= 0.0;
        outcome.next_posture = if outcome.posture_depleted {
            0.0
        } else {
            (defender.posture - (pool - tracker.remaining())).max(0.0)
        };
    }
    if let Some(state) = defender.state {
        outcome.next_enemy_state = Some(if outcome.next_hp <= 0.0 {
            EnemyState::Dead
        } else {
            state
        });
    }

    tracing::debug!(
        "Action {:?} from {}: {} hits, {} hp, {} posture ({} overkill)",
        request.context.action_kind,
        request.context.source_id,
        hit_count,
        outcome.total_hp_damage,
        outcome.total_posture_damage,
        outcome.overkill
    );

    outcome
}

/// `1 + percent / 100`, never below 0
fn bonus_multiplier(percent: Option<f64>) -> f64 {
    (1.0 + finite_or(percent.unwrap_or(0.0), 0.0) / 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::resonance::{ResonanceContext, SENTINEL_PATH};
    use crate::types::{ActionKind, EnemyAttributes, PlayerAttributes, PlayerStatus};

    fn hero() -> Player {
        Player::new("hero", PlayerAttributes::with_pools(100.0, 30.0))
    }

    fn wolf() -> Enemy {
        Enemy::new("wolf", EnemyAttributes::with_pools(200.0, 20.0))
    }

    fn player_attack(base_damage: f64, base_posture_damage: f64) -> ActionRequest {
        ActionRequest {
            context: HitContext::new("hero", ActionKind::Skill),
            target: Side::Enemy,
            base_damage,
            base_posture_damage,
        }
    }

    #[test]
    fn test_single_hit_against_enemy() {
        let (player, enemy) = (hero(), wolf());
        let mut rng = SeededRng::new(1);
        let outcome = resolve_action(
            &player_attack(50.0, 8.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );

        assert_eq!(outcome.hit_count, 1);
        assert!((outcome.total_hp_damage - 50.0).abs() < f64::EPSILON);
        assert!((outcome.total_posture_damage - 8.0).abs() < f64::EPSILON);
        assert!((outcome.next_hp - 150.0).abs() < f64::EPSILON);
        assert!((outcome.next_posture - 12.0).abs() < f64::EPSILON);
        assert!(!outcome.posture_depleted);
        assert_eq!(outcome.next_enemy_state, Some(EnemyState::Normal));
    }

    #[test]
    fn test_multi_hit_scaling_and_overkill() {
        let (player, enemy) = (hero(), wolf());
        let mut request = player_attack(100.0, 15.0);
        request.context = request.context.with_resonance(
            ResonanceContext::new()
                .with_active(true)
                .with_run_path(SENTINEL_PATH),
        );

        let mut rng = SeededRng::new(1);
        let outcome = resolve_action(
            &request,
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );

        assert_eq!(outcome.hit_count, 3);
        let hp: Vec<f64> = outcome.hits.iter().map(|h| h.hp_damage).collect();
        assert_eq!(hp, vec![100.0, 40.0, 25.0]);
        // Posture 15, 13 (12.75), 11 (11.25): pool of 20 then 7 overkill cap
        let posture: Vec<f64> = outcome.hits.iter().map(|h| h.posture_damage).collect();
        assert_eq!(posture, vec![15.0, 12.0, 0.0]);
        assert!((outcome.overkill - 7.0).abs() < f64::EPSILON);
        assert!(outcome.next_posture.abs() < f64::EPSILON);
        assert!(outcome.posture_depleted);
        assert!((outcome.next_hp - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enemy_attack_reduced_by_player() {
        let mut player = hero();
        player.attributes.damage_reduction_percent = Some(50.0);
        let mut enemy = wolf();
        enemy.attributes.base_hit_count = Some(2.0);

        let request = ActionRequest {
            context: HitContext::new("wolf", ActionKind::EnemyAttack),
            target: Side::Player,
            base_damage: 30.0,
            base_posture_damage: 0.0,
        };
        let mut rng = SeededRng::new(3);
        let outcome = resolve_action(
            &request,
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );

        // 30 -> 15, 12 (0.4 scalar) -> 6
        let hp: Vec<f64> = outcome.hits.iter().map(|h| h.hp_damage).collect();
        assert_eq!(hp, vec![15.0, 6.0]);
        assert!((outcome.next_hp - 79.0).abs() < f64::EPSILON);
        assert!(outcome.next_enemy_state.is_none());

        outcome.apply_to_player(&mut player);
        assert!((player.attributes.hp - 79.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_guaranteed_crit_and_damage_bonus() {
        let mut player = hero();
        player.attributes.crit_chance = 100.0;
        player.attributes.crit_damage = 50.0;
        player.attributes.damage_bonus_percent = Some(20.0);
        let enemy = wolf();

        let mut rng = SeededRng::new(9);
        let outcome = resolve_action(
            &player_attack(50.0, 0.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );

        // 50 * 1.2 * 1.5 = 90
        assert_eq!(outcome.critical_hits(), 1);
        assert!((outcome.total_hp_damage - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_broken_target_only_takes_overkill() {
        let player = hero();
        let mut enemy = wolf();
        enemy.state = EnemyState::Broken;
        enemy.attributes.posture = 0.0;

        let mut rng = SeededRng::new(2);
        let outcome = resolve_action(
            &player_attack(10.0, 30.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );

        assert!((outcome.total_posture_damage - 7.0).abs() < f64::EPSILON);
        assert!(outcome.next_posture.abs() < f64::EPSILON);
        assert!(!outcome.posture_depleted);
        assert_eq!(outcome.next_enemy_state, Some(EnemyState::Broken));
    }

    #[test]
    fn test_broken_player_posture_pinned() {
        let mut player = hero();
        player.status = PlayerStatus::Broken;
        let enemy = wolf();
        let request = ActionRequest {
            context: HitContext::new("wolf", ActionKind::EnemyAttack),
            target: Side::Player,
            base_damage: 5.0,
            base_posture_damage: 5.0,
        };

        let mut rng = SeededRng::new(2);
        let outcome = resolve_action(
            &request,
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );
        assert!(outcome.next_posture.abs() < f64::EPSILON);
    }

    #[test]
    fn test_killing_action_marks_enemy_dead() {
        let player = hero();
        let mut enemy = wolf();
        enemy.attributes.hp = 30.0;

        let mut rng = SeededRng::new(4);
        let outcome = resolve_action(
            &player_attack(80.0, 0.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );
        assert!(outcome.next_hp.abs() < f64::EPSILON);
        assert_eq!(outcome.next_enemy_state, Some(EnemyState::Dead));

        outcome.apply_to_enemy(&mut enemy);
        assert_eq!(enemy.state, EnemyState::Dead);
        assert!(enemy.attributes.hp.abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_posture_not_depleted_without_posture_damage() {
        let player = hero();
        let mut enemy = wolf();
        enemy.attributes.posture = 0.5;

        let mut rng = SeededRng::new(6);
        let outcome = resolve_action(
            &player_attack(10.0, 0.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );
        assert!(!outcome.posture_depleted);
        assert!(outcome.total_posture_damage.abs() < f64::EPSILON);
        assert!((outcome.next_posture - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_depleted_pool_leaves_no_fractional_posture() {
        let player = hero();
        let mut enemy = wolf();
        enemy.attributes.posture = 12.5;

        let mut rng = SeededRng::new(6);
        let outcome = resolve_action(
            &player_attack(10.0, 12.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );
        assert!(outcome.posture_depleted);
        assert!(outcome.next_posture.abs() < f64::EPSILON);
    }

    #[test]
    fn test_dead_enemy_takes_nothing() {
        let player = hero();
        let mut enemy = wolf();
        enemy.state = EnemyState::Dead;
        enemy.attributes.hp = 0.0;

        let mut rng = SeededRng::new(4);
        let outcome = resolve_action(
            &player_attack(80.0, 10.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );
        assert!(outcome.hits.is_empty());
        assert!(outcome.total_hp_damage.abs() < f64::EPSILON);
        assert_eq!(outcome.next_enemy_state, Some(EnemyState::Dead));
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let mut player = hero();
        player.attributes.crit_chance = 40.0;
        player.attributes.crit_damage = 100.0;
        let enemy = wolf();
        let request = player_attack(60.0, 5.0).with_declared(6.0);
        let config = CombatConfig::default();

        let a = resolve_action(
            &request,
            &Combatants::new(&player, &enemy),
            &config,
            &mut SeededRng::new(77),
        );
        let b = resolve_action(
            &request,
            &Combatants::new(&player, &enemy),
            &config,
            &mut SeededRng::new(77),
        );
        assert_eq!(a, b);
        assert_eq!(a.hit_count, 6);
    }

    #[test]
    fn test_apply_ignores_wrong_side() {
        let mut player = hero();
        let enemy = wolf();
        let mut rng = SeededRng::new(5);
        let outcome = resolve_action(
            &player_attack(40.0, 0.0),
            &Combatants::new(&player, &enemy),
            &CombatConfig::default(),
            &mut rng,
        );
        outcome.apply_to_player(&mut player);
        assert!((player.attributes.hp - 100.0).abs() < f64::EPSILON);
    }

    impl ActionRequest {
        fn with_declared(mut self, count: f64) -> Self {
            self.context = self.context.with_declared_hit_count(count);
            self
        }
    }
}
