//! Prelude module for convenient imports
//!
//! ```rust
//! use skirmish_core::prelude::*;
//! ```

// Core types
pub use crate::character::Character;
pub use crate::types::{GameStatus, ItemKind};

// Items
pub use crate::item::{Armor, Consumable, Item, UseEffect, Weapon};

// Inventory
pub use crate::inventory::{rule, Inventory};

// Combat
pub use crate::combat::{resolve_counter_attack, resolve_counter_attack_with_rng, AttackOutcome};

// Game loop
pub use crate::game::{Game, TurnOutcome};

// Config
pub use crate::config::{parse_encounter_config, ConfigError, EncounterConfig};
