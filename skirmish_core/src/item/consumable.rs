//! Consumable - Permanent health gain

use super::{Item, UseEffect};
use crate::character::Character;
use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// A consumable; drinking it adds to health with no cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    /// Display name
    pub name: String,
    /// Health gained per use
    pub healing: i32,
}

impl Consumable {
    /// Create a new consumable
    pub fn new(name: String, healing: i32) -> Self {
        Consumable { name, healing }
    }
}

impl Item for Consumable {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> i32 {
        self.healing
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Consumable
    }

    fn apply(&self, character: &mut Character) -> UseEffect {
        character.modify_stats(self.healing, 0, 0);
        UseEffect {
            item_name: self.name.clone(),
            kind: ItemKind::Consumable,
            amount: self.healing,
        }
    }
}
