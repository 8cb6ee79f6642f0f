//! DoT stack resolution - collapse concurrent stacks into one tick

use crate::sanitize::finite_or;
use serde::{Deserialize, Serialize};

/// One outstanding damage-over-time instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotStack {
    /// Unique instance id
    pub id: String,
    /// Element tag (e.g. "fire", "poison"); resolution ignores it
    pub element: String,
    /// Id of the actor that applied this stack
    pub source_id: String,
    pub damage_per_tick: f64,
    #[serde(default)]
    pub posture_damage_per_tick: Option<f64>,
    /// Ticks left, including the next one
    pub remaining_turns: i32,
    /// Turn on which the stack was applied
    #[serde(default)]
    pub applied_turn: u32,
}

impl DotStack {
    pub fn new(
        id: impl Into<String>,
        element: impl Into<String>,
        source_id: impl Into<String>,
        damage_per_tick: f64,
        remaining_turns: i32,
    ) -> Self {
        DotStack {
            id: id.into(),
            element: element.into(),
            source_id: source_id.into(),
            damage_per_tick,
            posture_damage_per_tick: None,
            remaining_turns,
            applied_turn: 0,
        }
    }

    pub fn with_posture_damage(mut self, posture_damage_per_tick: f64) -> Self {
        self.posture_damage_per_tick = Some(posture_damage_per_tick);
        self
    }

    pub fn with_applied_turn(mut self, turn: u32) -> Self {
        self.applied_turn = turn;
        self
    }

    /// Whether this stack still has a tick to deal
    pub fn is_active(&self) -> bool {
        self.remaining_turns > 0
    }
}

/// Combined result of one DoT tick across all stacks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DotResolution {
    /// Stacks that dealt damage this tick
    pub stack_count: u32,
    pub total_hp_damage: f64,
    pub total_posture_damage: f64,
    /// Stacks that survive into the next tick
    pub next_stacks: Vec<DotStack>,
}

/// Sum one tick of every active stack and decrement their durations.
///
/// Expired stacks in the input contribute nothing. Stacks on their final
/// tick deal damage and are dropped from `next_stacks`. Elements are pooled.
pub fn resolve_dot_stacks(stacks: &[DotStack]) -> DotResolution {
    let mut resolution = DotResolution::default();

    for stack in stacks {
        let remaining = stack.remaining_turns.max(0);
        if remaining <= 0 {
            tracing::trace!("Dropping expired DoT stack {}", stack.id);
            continue;
        }

        let hp_damage = finite_or(stack.damage_per_tick, 0.0);
        let posture_damage = finite_or(stack.posture_damage_per_tick.unwrap_or(0.0), 0.0);
        if hp_damage != stack.damage_per_tick {
            tracing::debug!("DoT stack {} has non-finite damage, treating as 0", stack.id);
        }

        resolution.stack_count += 1;
        resolution.total_hp_damage += hp_damage;
        resolution.total_posture_damage += posture_damage;

        let next_turns = remaining - 1;
        tracing::trace!(
            "DoT stack {} ({}) ticks for {} hp / {} posture, {} turns left",
            stack.id,
            stack.element,
            hp_damage,
            posture_damage,
            next_turns
        );
        if next_turns > 0 {
            resolution.next_stacks.push(DotStack {
                remaining_turns: next_turns,
                ..stack.clone()
            });
        }
    }

    resolution
}
