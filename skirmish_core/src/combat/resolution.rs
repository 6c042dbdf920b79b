//! Counter attack resolution - Roll and apply the enemy's retaliation

use super::result::AttackOutcome;
use crate::character::Character;
use crate::config::EncounterConfig;
use rand::Rng;

/// Roll the enemy's attack value, uniform over the configured range
pub fn roll_enemy_attack(config: &EncounterConfig, rng: &mut impl Rng) -> i32 {
    rng.gen_range(config.enemy_attack_min..=config.enemy_attack_max)
}

/// Roll and apply a counter attack to the character (thread-local RNG)
pub fn resolve_counter_attack(character: &mut Character, config: &EncounterConfig) -> AttackOutcome {
    let mut rng = rand::thread_rng();
    resolve_counter_attack_with_rng(character, config, &mut rng)
}

/// Roll and apply a counter attack with a provided RNG (for deterministic testing)
pub fn resolve_counter_attack_with_rng(
    character: &mut Character,
    config: &EncounterConfig,
    rng: &mut impl Rng,
) -> AttackOutcome {
    let roll = roll_enemy_attack(config, rng);
    character.receive_attack(roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_stays_in_range() {
        let config = EncounterConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let roll = roll_enemy_attack(&config, &mut rng);
            assert!((20..=40).contains(&roll), "roll {} out of range", roll);
        }
    }

    #[test]
    fn test_counter_attack_applies_defense() {
        let config = EncounterConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut character = Character::new(100, 10, 5);

        let outcome = resolve_counter_attack_with_rng(&mut character, &config, &mut rng);

        // Every roll in [20, 40] beats 5 defense
        assert_eq!(outcome.damage_taken, outcome.attack_damage - 5);
        assert_eq!(character.health, 100 - outcome.damage_taken);
    }

    #[test]
    fn test_counter_attack_absorbed_by_heavy_defense() {
        let config = EncounterConfig::default();
        let mut character = Character::new(100, 10, 40);

        // 40 defense absorbs even the maximum roll, whatever the RNG says
        let outcome = resolve_counter_attack(&mut character, &config);

        assert!(outcome.absorbed());
        assert_eq!(character.health, 100);
    }
}
