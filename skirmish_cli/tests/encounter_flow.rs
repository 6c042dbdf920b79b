//! Integration test: Build loadout -> Fight the encounter -> Check outcomes
//!
//! This test validates the full flow from inventory setup through turn
//! resolution against the core library, with seeded RNGs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish_core::{
    config::EncounterConfig,
    game::{Game, TurnOutcome},
    inventory::Inventory,
    item::{Armor, Consumable, Weapon},
    types::{GameStatus, ItemKind},
};

/// The demo's fixed starting loadout
fn starting_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add(Box::new(Weapon::new("Sword".to_string(), 20)));
    inventory.add(Box::new(Weapon::new("Axe".to_string(), 30)));
    inventory.add(Box::new(Armor::new("Plate Mail".to_string(), 30)));
    inventory.add(Box::new(Armor::new("Chainmail".to_string(), 20)));
    inventory.add(Box::new(Consumable::new("Health Potion".to_string(), 50)));
    inventory.add(Box::new(Consumable::new("Mana Potion".to_string(), 30)));
    inventory
}

fn default_game() -> Game {
    Game::new(EncounterConfig::default(), starting_inventory()).unwrap()
}

#[test]
fn sword_opening_turn() {
    let mut game = default_game();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let outcome = game.take_turn_with_rng(1, &mut rng);
    let (effect, counter) = match outcome {
        TurnOutcome::ItemUsed { effect, counter } => (effect, counter),
        other => panic!("expected ItemUsed, got {:?}", other),
    };

    // The sword buffs attack by its value and hits the enemy for the same
    assert_eq!(effect.item_name, "Sword");
    assert_eq!(game.character.attack, 30);
    assert_eq!(game.enemy_health, 80);

    // Exactly one counter roll in [20, 40], mitigated by 5 defense
    let counter = counter.expect("weapon use draws a counter attack");
    assert!((20..=40).contains(&counter.attack_damage));
    assert_eq!(counter.damage_taken, (counter.attack_damage - 5).max(0));
    assert_eq!(game.character.health, 100 - counter.damage_taken);
}

#[test]
fn plate_mail_stacks_and_goes_unanswered() {
    let mut game = default_game();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for uses in 1..=5 {
        let outcome = game.take_turn_with_rng(3, &mut rng);
        match outcome {
            TurnOutcome::ItemUsed { effect, counter } => {
                assert_eq!(effect.kind, ItemKind::Armor);
                assert!(counter.is_none());
            }
            other => panic!("expected ItemUsed, got {:?}", other),
        }
        assert_eq!(game.character.defense, 5 + 30 * uses);
    }

    // Nothing else moved in five turns of armor use
    assert_eq!(game.character.health, 100);
    assert_eq!(game.character.attack, 10);
    assert_eq!(game.enemy_health, 100);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn potions_overheal_past_starting_health() {
    let mut game = default_game();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    game.take_turn_with_rng(5, &mut rng);
    assert_eq!(game.character.health, 150);
    game.take_turn_with_rng(6, &mut rng);
    assert_eq!(game.character.health, 180);
    assert_eq!(game.enemy_health, 100);
}

#[test]
fn axe_spam_drives_the_enemy_to_zero() {
    // A big health pool makes the outcome independent of the counter
    // rolls: four Axe hits always empty the enemy's 100 before four
    // counters (at most 35 each) empty 1000.
    let config = EncounterConfig {
        player_health: 1000,
        ..EncounterConfig::default()
    };
    let mut game = Game::new(config, starting_inventory()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut turns = 0;
    while game.status() == GameStatus::Playing {
        game.take_turn_with_rng(2, &mut rng);
        turns += 1;
    }

    assert_eq!(turns, 4);
    assert_eq!(game.enemy_health, -20);
    assert_eq!(game.status(), GameStatus::PlayerWon);
    assert!(game.character.health >= 1000 - 4 * 35);
}

#[test]
fn quitting_works_at_any_health() {
    let mut game = default_game();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // Take a hit first, then quit mid-fight
    game.take_turn_with_rng(1, &mut rng);
    assert_eq!(game.status(), GameStatus::Playing);

    let outcome = game.take_turn_with_rng(0, &mut rng);
    assert!(matches!(outcome, TurnOutcome::Quit));
    assert_eq!(game.status(), GameStatus::PlayerQuit);
}

#[test]
fn double_zero_is_reported_as_a_loss() {
    // The sword empties the enemy pool on the same turn every possible
    // counter roll empties the player's.
    let config = EncounterConfig {
        player_health: 1,
        player_defense: 0,
        enemy_health: 20,
        ..EncounterConfig::default()
    };
    let mut game = Game::new(config, starting_inventory()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    game.take_turn_with_rng(1, &mut rng);
    assert!(game.character.health <= 0);
    assert!(game.enemy_health <= 0);
    assert_eq!(game.status(), GameStatus::PlayerLost);
}
