//! AttackOutcome - Outcome of a single enemy hit on the character

use serde::{Deserialize, Serialize};

/// Result of applying one enemy attack to the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Raw damage the enemy rolled
    pub attack_damage: i32,
    /// Damage that made it through defense (0 when fully absorbed)
    pub damage_taken: i32,
    /// Health before the hit
    pub health_before: i32,
    /// Health after the hit
    pub health_after: i32,
}

impl AttackOutcome {
    /// Whether defense prevented any health loss
    pub fn absorbed(&self) -> bool {
        self.damage_taken == 0
    }
}
