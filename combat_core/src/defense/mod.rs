//! Defense system - damage reduction

mod reduction;

pub use reduction::{compute_damage_taken, effective_reduction_percent};
