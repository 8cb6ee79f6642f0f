//! Damage scaling

mod multi_hit;

pub use multi_hit::{apply_multi_hit_hp_scalar, apply_multi_hit_posture_scalar, scalar_for};
