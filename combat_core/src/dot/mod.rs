//! DoT (Damage over Time) system

mod stack;
pub mod tick;

pub use stack::{resolve_dot_stacks, DotResolution, DotStack};
pub use tick::{
    apply_dot_tick_to_enemy, apply_dot_tick_to_player, tick_enemy, tick_player, EnemyTickInput,
    EnemyTickResult, PlayerTickInput, PlayerTickResult,
};
