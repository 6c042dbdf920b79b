//! Weapon - Permanent attack buff whose value doubles as enemy damage

use super::{Item, UseEffect};
use crate::character::Character;
use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// A weapon
///
/// Using one is modeled as a permanent attack buff, not a one-shot strike;
/// the damage dealt to the enemy is a separate step taken by the game loop
/// and equals the weapon's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name
    pub name: String,
    /// Attack gained per use, and damage dealt to the enemy
    pub damage: i32,
}

impl Weapon {
    /// Create a new weapon
    pub fn new(name: String, damage: i32) -> Self {
        Weapon { name, damage }
    }
}

impl Item for Weapon {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> i32 {
        self.damage
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Weapon
    }

    fn apply(&self, character: &mut Character) -> UseEffect {
        character.modify_stats(0, self.damage, 0);
        UseEffect {
            item_name: self.name.clone(),
            kind: ItemKind::Weapon,
            amount: self.damage,
        }
    }
}
