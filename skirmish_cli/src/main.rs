//! Skirmish CLI - A stdin/stdout front-end for the combat demo
//!
//! Each turn shows the character's stats, the inventory table and the
//! enemy's health, then reads one item number. Weapons damage the enemy
//! and draw a counter attack; armor and consumables only buff the player.

use std::io::{self, BufRead, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skirmish_core::{
    combat::AttackOutcome,
    config::EncounterConfig,
    game::{Game, TurnOutcome},
    inventory::{rule, Inventory},
    item::{Armor, Consumable, UseEffect, Weapon},
    types::{GameStatus, ItemKind},
};

/// Build the fixed six-item starting loadout
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

/// Right-align a banner line the way the tables do
fn banner(text: &str) -> String {
    format!("{:>30} ", text)
}

fn use_message(effect: &UseEffect) -> String {
    match effect.kind {
        ItemKind::Weapon => format!(
            "You attack with {} and deal {} damage!",
            effect.item_name, effect.amount
        ),
        ItemKind::Armor => format!(
            "You equip {} and gain {} defense!",
            effect.item_name, effect.amount
        ),
        ItemKind::Consumable => format!(
            "You use {} and gain {} health!",
            effect.item_name, effect.amount
        ),
    }
}

fn attack_message(outcome: &AttackOutcome) -> String {
    if outcome.absorbed() {
        "You were attacked, but your defense prevented any damage.".to_string()
    } else {
        format!("You were attacked and took {} damage!", outcome.damage_taken)
    }
}

/// Drive a whole session over the given input and output
///
/// Non-integer input re-prompts without consuming a turn; end of input
/// plays as entering 0, so a piped session always reaches GAME OVER.
fn run<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut out: W,
    rng: &mut impl Rng,
) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", banner("GAME START"))?;
    writeln!(out, "{}", rule())?;

    while !game.is_over() {
        writeln!(out, "Character Stats:")?;
        writeln!(out, "Health: {}", game.character.health)?;
        writeln!(out, "Attack: {}", game.character.attack)?;
        writeln!(out, "Defense: {}", game.character.defense)?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "{}", game.inventory.render_table())?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "Enemy Health: {}", game.enemy_health)?;
        writeln!(out, "{}", rule())?;

        write!(
            out,
            "Enter the number of the item you want to use (or enter 0 to quit): "
        )?;
        out.flush()?;

        let mut line = String::new();
        let choice = if input.read_line(&mut line)? == 0 {
            // End of input plays as quitting
            0
        } else {
            match line.trim().parse::<i32>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(out, "Invalid input. Please enter a number.")?;
                    continue;
                }
            }
        };
        writeln!(out, "{}", rule())?;

        match game.take_turn_with_rng(choice, rng) {
            TurnOutcome::Quit => writeln!(out, "You quit the game.")?,
            TurnOutcome::InvalidChoice => writeln!(out, "Invalid choice.")?,
            TurnOutcome::ItemUsed { effect, counter } => {
                writeln!(out, "{}", use_message(&effect))?;
                if let Some(outcome) = counter {
                    writeln!(out, "{}", attack_message(&outcome))?;
                }
                writeln!(out, "{}", rule())?;
            }
        }
    }

    match game.status() {
        GameStatus::PlayerLost => {
            writeln!(out, "{}", rule())?;
            writeln!(out, "{}", banner("You lost! Your health reached 0."))?;
        }
        GameStatus::PlayerWon => {
            writeln!(out, "{}", rule())?;
            writeln!(out, "{}", banner("You won! The enemy's health reached 0."))?;
        }
        _ => {}
    }
    writeln!(out, "{}", rule())?;
    writeln!(out, "{:>56} ", "GAME OVER")?;
    writeln!(out, "{}", rule())?;

    Ok(())
}

fn main() -> io::Result<()> {
    let mut rng = ChaCha8Rng::from_entropy();
    let mut game = Game::new(EncounterConfig::default(), starting_inventory())
        .expect("the default encounter config is valid");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut game, stdin.lock(), stdout.lock(), &mut rng)
}
