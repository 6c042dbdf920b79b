//! Game - Turn state machine for a single encounter

use crate::character::Character;
use crate::combat::{resolve_counter_attack_with_rng, AttackOutcome};
use crate::config::{ConfigError, EncounterConfig};
use crate::inventory::Inventory;
use crate::item::UseEffect;
use crate::types::{GameStatus, ItemKind};
use rand::Rng;

/// What a single submitted choice did
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The player chose 0; the encounter is over
    Quit,
    /// The choice was outside the inventory range; nothing changed and no
    /// turn was consumed
    InvalidChoice,
    /// An item was used
    ItemUsed {
        effect: UseEffect,
        /// The enemy's retaliation; present only after a weapon use
        counter: Option<AttackOutcome>,
    },
}

/// One encounter: the player, the enemy health pool and the inventory
///
/// The enemy is a bare health integer, not a second character; it never
/// acts except to counter a weapon use.
pub struct Game {
    pub character: Character,
    pub enemy_health: i32,
    pub inventory: Inventory,
    config: EncounterConfig,
    status: GameStatus,
}

impl Game {
    /// Set up an encounter from a config and a starting inventory
    pub fn new(config: EncounterConfig, inventory: Inventory) -> Result<Self, ConfigError> {
        config.validate()?;
        let character = Character::new(
            config.player_health,
            config.player_attack,
            config.player_defense,
        );
        Ok(Game {
            character,
            enemy_health: config.enemy_health,
            inventory,
            config,
            status: GameStatus::Playing,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Resolve one submitted choice (thread-local RNG)
    pub fn take_turn(&mut self, choice: i32) -> TurnOutcome {
        let mut rng = rand::thread_rng();
        self.take_turn_with_rng(choice, &mut rng)
    }

    /// Resolve one submitted choice with a provided RNG (for deterministic testing)
    ///
    /// Weapons buff attack, damage the enemy by the weapon's value and draw
    /// exactly one counter attack. Armor and consumables buff their stat
    /// and leave the enemy alone for the turn.
    pub fn take_turn_with_rng(&mut self, choice: i32, rng: &mut impl Rng) -> TurnOutcome {
        if choice == 0 {
            self.status = GameStatus::PlayerQuit;
            return TurnOutcome::Quit;
        }
        if choice < 1 {
            return TurnOutcome::InvalidChoice;
        }
        let item = match self.inventory.get(choice as usize - 1) {
            Some(item) => item,
            None => return TurnOutcome::InvalidChoice,
        };

        let effect = item.apply(&mut self.character);
        let counter = if item.kind() == ItemKind::Weapon {
            self.enemy_health -= item.value();
            Some(resolve_counter_attack_with_rng(
                &mut self.character,
                &self.config,
                rng,
            ))
        } else {
            None
        };

        self.update_status();
        TurnOutcome::ItemUsed { effect, counter }
    }

    // Loss is checked before the win so a simultaneous double zero reads
    // as a loss.
    fn update_status(&mut self) {
        if self.character.health <= 0 {
            self.status = GameStatus::PlayerLost;
        } else if self.enemy_health <= 0 {
            self.status = GameStatus::PlayerWon;
        }
    }
}
