//! Damage reduction - percentage mitigation with a guaranteed minimum hit
//!
//! Formula:
//! - reduction = clamp(percent, 0, max_fraction * 100)
//! - damage_taken = max(1, floor(raw - raw * reduction / 100))
//!
//! `max_fraction` is always below 1.0, so positive damage is never fully negated.

use crate::config::DamageReductionConstants;
use crate::sanitize::finite_or;

/// Final HP damage after the defender's damage reduction.
///
/// # Arguments
/// * `raw_damage` - Incoming damage before reduction
/// * `damage_reduction_percent` - Defender's reduction (25.0 = 25%), 0 when absent
///
/// # Returns
/// 0 when `raw_damage` is not positive, otherwise at least 1
pub fn compute_damage_taken(
    raw_damage: f64,
    damage_reduction_percent: Option<f64>,
    constants: &DamageReductionConstants,
) -> f64 {
    let raw = finite_or(raw_damage, 0.0);
    if raw <= 0.0 {
        return 0.0;
    }

    let reduction = effective_reduction_percent(damage_reduction_percent, constants);
    (raw - raw * (reduction / 100.0)).floor().max(1.0)
}

/// Reduction percent clamped into `[0, max_fraction * 100]`
pub fn effective_reduction_percent(
    damage_reduction_percent: Option<f64>,
    constants: &DamageReductionConstants,
) -> f64 {
    let max = finite_or(constants.max_fraction, 0.0).clamp(0.0, 1.0 - f64::EPSILON) * 100.0;
    finite_or(damage_reduction_percent.unwrap_or(0.0), 0.0).clamp(0.0, max)
}
