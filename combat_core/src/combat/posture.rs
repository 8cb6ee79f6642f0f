//! Posture overkill tracking for a single action
//!
//! A tracker is built at the start of one action and fed every hit of that
//! action. Damage is absorbed by the remaining posture pool first; anything
//! beyond the pool counts as overkill until the per-action cap is reached,
//! after which further posture damage is discarded.
//!
//! Build a fresh tracker per action and per target.

use crate::sanitize::{finite_or, floor_non_negative, round_non_negative};

#[derive(Debug, Clone, PartialEq)]
pub struct PostureOverkillTracker {
    cap: f64,
    remaining: f64,
    overkill: f64,
}

impl PostureOverkillTracker {
    /// # Arguments
    /// * `max_posture` - Target's posture pool size, used for the overkill cap
    /// * `start_posture` - Target's posture when the action begins
    /// * `overkill_cap_fraction` - Fraction of `max_posture` allowed as overkill
    pub fn new(max_posture: f64, start_posture: f64, overkill_cap_fraction: f64) -> Self {
        let cap = (finite_or(max_posture, 0.0) * finite_or(overkill_cap_fraction, 0.0))
            .round()
            .max(0.0);
        PostureOverkillTracker {
            cap,
            remaining: floor_non_negative(start_posture),
            overkill: 0.0,
        }
    }

    /// Apply one hit's posture damage, returning how much of it counts
    pub fn apply(&mut self, raw_damage: f64) -> f64 {
        let damage = round_non_negative(raw_damage);
        if damage <= 0.0 {
            return 0.0;
        }

        if self.remaining > 0.0 {
            let applied = self.remaining.min(damage);
            self.remaining -= applied;
            let overflow = damage - applied;
            if overflow > 0.0 && self.overkill < self.cap {
                return applied + self.consume_overkill(overflow);
            }
            return applied;
        }

        if self.overkill >= self.cap {
            return 0.0;
        }
        self.consume_overkill(damage)
    }

    fn consume_overkill(&mut self, amount: f64) -> f64 {
        let extra = amount.min(self.cap - self.overkill);
        self.overkill += extra;
        extra
    }

    /// Overkill consumed so far in this action
    pub fn overkill(&self) -> f64 {
        self.overkill
    }

    /// Posture left in the pool
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Maximum overkill for this action
    pub fn cap(&self) -> f64 {
        self.cap
    }
}
