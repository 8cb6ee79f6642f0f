//! Multi-hit scaling - diminishing returns across hits of one action
//!
//! Hit 0 is the undiminished baseline. Later hits look up their position in a
//! scalar table; positions past the end reuse the last entry.

use crate::config::MultiHitConstants;
use crate::sanitize::non_negative;

/// Multiplier for a 0-based hit position.
///
/// Non-finite table values fall back to `min_scalar` (or 1.0 without one),
/// and `min_scalar` acts as a floor on the looked-up value.
pub fn scalar_for(hit_index: usize, table: &[f64], min_scalar: Option<f64>) -> f64 {
    let min_scalar = min_scalar.filter(|v| v.is_finite());
    let looked_up = table.get(hit_index).or_else(|| table.last()).copied();

    let scalar = match looked_up {
        Some(value) if value.is_finite() => value,
        _ => min_scalar.unwrap_or(1.0),
    };

    match min_scalar {
        Some(min) if scalar < min => min,
        _ => scalar,
    }
}

/// Scale a hit's HP damage by its position in the sequence
pub fn apply_multi_hit_hp_scalar(
    base_damage: f64,
    hit_index: usize,
    constants: &MultiHitConstants,
) -> f64 {
    let scalar = scalar_for(hit_index, &constants.hp_table, constants.hp_min_scalar);
    scale_at_least_one(base_damage, scalar)
}

/// Scale a hit's posture damage by its position in the sequence
pub fn apply_multi_hit_posture_scalar(
    base_posture: f64,
    hit_index: usize,
    constants: &MultiHitConstants,
) -> f64 {
    let scalar = scalar_for(
        hit_index,
        &constants.posture_table,
        constants.posture_min_scalar,
    );
    scale_at_least_one(base_posture, scalar)
}

/// Positive amounts never scale below 1
fn scale_at_least_one(base: f64, scalar: f64) -> f64 {
    let base = non_negative(base);
    if base <= 0.0 {
        return 0.0;
    }
    (base * scalar).round().max(1.0)
}
