//! Core types specific to the skirmish demo

use serde::{Deserialize, Serialize};

/// Item variant tag, also shown in the inventory table's Type column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

impl ItemKind {
    /// Display tag for the inventory table
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Consumable => "Consumable",
        }
    }

    /// Get all item kinds
    pub fn all() -> &'static [ItemKind] {
        &[ItemKind::Weapon, ItemKind::Armor, ItemKind::Consumable]
    }
}

/// Where the encounter stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    PlayerWon,
    PlayerLost,
    PlayerQuit,
}

impl GameStatus {
    /// Whether the encounter has reached a terminal state
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}
