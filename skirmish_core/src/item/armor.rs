//! Armor - Permanent defense buff

use super::{Item, UseEffect};
use crate::character::Character;
use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// A piece of armor; equipping it raises defense for good
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    /// Display name
    pub name: String,
    /// Defense gained per use
    pub defense: i32,
}

impl Armor {
    /// Create a new piece of armor
    pub fn new(name: String, defense: i32) -> Self {
        Armor { name, defense }
    }
}

impl Item for Armor {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> i32 {
        self.defense
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Armor
    }

    fn apply(&self, character: &mut Character) -> UseEffect {
        character.modify_stats(0, 0, self.defense);
        UseEffect {
            item_name: self.name.clone(),
            kind: ItemKind::Armor,
            amount: self.defense,
        }
    }
}
