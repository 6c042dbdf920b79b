//! Combat - The enemy's counter attack and its outcome

mod resolution;
mod result;

pub use resolution::{resolve_counter_attack, resolve_counter_attack_with_rng, roll_enemy_attack};
pub use result::AttackOutcome;
