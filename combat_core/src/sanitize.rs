//! Clamp-or-default helpers applied at every numeric input boundary
//!
//! Combat functions never fail on malformed numbers. Each helper maps any
//! `f64` (including NaN and infinities) onto a safe value.

/// Non-finite values become `fallback`, everything else passes through
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Non-finite or negative values become 0
pub fn non_negative(value: f64) -> f64 {
    finite_or(value, 0.0).max(0.0)
}

/// Floor of a non-negative value; non-finite becomes 0
pub fn floor_non_negative(value: f64) -> f64 {
    non_negative(value).floor()
}

/// Round of a non-negative value; non-finite becomes 0
pub fn round_non_negative(value: f64) -> f64 {
    non_negative(value).round()
}

/// Floor then clamp into `[min, max]`; non-finite becomes `min`
pub fn floor_clamp(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.floor().clamp(min, max)
}

/// Floor then clamp into `[min, max]` as an integer count; non-finite becomes `min`
pub fn count_in_range(value: f64, min: u32, max: u32) -> u32 {
    floor_clamp(value, f64::from(min), f64::from(max)) as u32
}
