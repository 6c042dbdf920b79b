//! Encounter constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable encounter constants
///
/// Defaults match the fixed values the demo ships with; every field can be
/// overridden individually when parsed from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Player starting health
    #[serde(default = "default_player_health")]
    pub player_health: i32,
    /// Player starting attack
    #[serde(default = "default_player_attack")]
    pub player_attack: i32,
    /// Player starting defense
    #[serde(default = "default_player_defense")]
    pub player_defense: i32,
    /// Enemy health pool
    #[serde(default = "default_enemy_health")]
    pub enemy_health: i32,
    /// Lower bound of the enemy attack roll (inclusive)
    #[serde(default = "default_enemy_attack_min")]
    pub enemy_attack_min: i32,
    /// Upper bound of the enemy attack roll (inclusive)
    #[serde(default = "default_enemy_attack_max")]
    pub enemy_attack_max: i32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        EncounterConfig {
            player_health: 100,
            player_attack: 10,
            player_defense: 5,
            enemy_health: 100,
            enemy_attack_min: 20,
            enemy_attack_max: 40,
        }
    }
}

impl EncounterConfig {
    /// Check that the config describes a playable encounter
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_health <= 0 {
            return Err(ConfigError::ValidationError(
                "player_health must be positive".to_string(),
            ));
        }
        if self.enemy_health <= 0 {
            return Err(ConfigError::ValidationError(
                "enemy_health must be positive".to_string(),
            ));
        }
        if self.enemy_attack_min > self.enemy_attack_max {
            return Err(ConfigError::ValidationError(format!(
                "enemy attack range is inverted: {} > {}",
                self.enemy_attack_min, self.enemy_attack_max
            )));
        }
        Ok(())
    }
}

fn default_player_health() -> i32 {
    100
}
fn default_player_attack() -> i32 {
    10
}
fn default_player_defense() -> i32 {
    5
}
fn default_enemy_health() -> i32 {
    100
}
fn default_enemy_attack_min() -> i32 {
    20
}
fn default_enemy_attack_max() -> i32 {
    40
}
