//! Character - The player's health/attack/defense block

use crate::combat::AttackOutcome;
use serde::{Deserialize, Serialize};

/// The player entity
///
/// Stats are plain signed integers with no clamping: health may climb past
/// its starting value through consumables and may go negative on the hit
/// that ends the encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Character {
    /// Create a new character with the given starting stats
    pub fn new(health: i32, attack: i32, defense: i32) -> Self {
        Character {
            health,
            attack,
            defense,
        }
    }

    /// Add deltas to the three stats, unconditionally
    pub fn modify_stats(&mut self, health_change: i32, attack_change: i32, defense_change: i32) {
        self.health += health_change;
        self.attack += attack_change;
        self.defense += defense_change;
    }

    /// Apply an incoming attack
    ///
    /// Damage at or below the character's defense is fully absorbed and
    /// leaves health untouched; anything above it comes straight off health.
    pub fn receive_attack(&mut self, damage: i32) -> AttackOutcome {
        let health_before = self.health;
        let mitigated = damage - self.defense;
        let damage_taken = if mitigated > 0 {
            self.modify_stats(-mitigated, 0, 0);
            mitigated
        } else {
            0
        };

        AttackOutcome {
            attack_damage: damage,
            damage_taken,
            health_before,
            health_after: self.health,
        }
    }

    /// Whether the character is still standing
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
