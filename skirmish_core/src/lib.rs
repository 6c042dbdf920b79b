//! skirmish_core - Core library for a turn-based combat demo
//!
//! This library provides:
//! - Character: the player's health/attack/defense block
//! - Item: polymorphic weapons, armor and consumables with a shared use contract
//! - Inventory: ordered item storage with a fixed-width table view
//! - Combat: the enemy's counter attack roll and resolution
//! - Game: the turn state machine driving an encounter

pub mod character;
pub mod combat;
pub mod config;
pub mod game;
pub mod inventory;
pub mod item;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use character::Character;
pub use combat::{
    resolve_counter_attack, resolve_counter_attack_with_rng, roll_enemy_attack, AttackOutcome,
};
pub use config::{parse_encounter_config, ConfigError, EncounterConfig};
pub use game::{Game, TurnOutcome};
pub use inventory::{rule, Inventory};
pub use item::{Armor, Consumable, Item, UseEffect, Weapon};
pub use types::{GameStatus, ItemKind};
