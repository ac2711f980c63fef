//! Boss state.
//!
//! One boss per game, shared by all players. Descriptive fields and stats
//! are fixed at construction; only `current_hp` changes, only downward, and
//! only through the battle engine. A boss at zero health is defeated, and
//! defeat is terminal: there is no respawn path.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// The shared adversary.
///
/// ```
/// use ace_arena::{Game, GameSetup};
///
/// let setup = GameSetup::from_columns(
///     vec!["King".into()], vec!["img".into()], vec![400], vec![100],
///     "Ace of Spades", "arweave://ace", 1000, 100,
/// ).unwrap();
/// let game = Game::new(setup).unwrap();
///
/// assert_eq!(game.boss().name(), "Ace of Spades");
/// assert_eq!(game.boss().current_hp(), 1000);
/// assert!(!game.boss().is_defeated());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    name: String,
    image: String,
    max_hp: u32,
    attack_damage: u32,
    current_hp: u32,
}

impl Boss {
    /// Create a boss at full health.
    ///
    /// Fails with `InvalidStats` if health or attack is zero.
    pub(crate) fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        max_hp: u32,
        attack_damage: u32,
    ) -> Result<Self, GameError> {
        if max_hp == 0 {
            return Err(GameError::InvalidStats { stat: "boss hp" });
        }
        if attack_damage == 0 {
            return Err(GameError::InvalidStats {
                stat: "boss attack damage",
            });
        }
        Ok(Self {
            name: name.into(),
            image: image.into(),
            max_hp,
            attack_damage,
            current_hp: max_hp,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content locator for the boss image.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Starting (and maximum) health.
    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Damage dealt per counter-attack.
    #[must_use]
    pub fn attack_damage(&self) -> u32 {
        self.attack_damage
    }

    /// Current health.
    #[must_use]
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// A boss at zero health is defeated; further attacks are rejected.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Reduce health, saturating at zero. Returns the remaining health.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Boss {
        Boss::new("Ace of Spades", "arweave://ace", 1000, 100).unwrap()
    }

    #[test]
    fn test_starts_at_full_health() {
        let boss = sample();

        assert_eq!(boss.name(), "Ace of Spades");
        assert_eq!(boss.image(), "arweave://ace");
        assert_eq!(boss.max_hp(), 1000);
        assert_eq!(boss.attack_damage(), 100);
        assert_eq!(boss.current_hp(), 1000);
        assert!(!boss.is_defeated());
    }

    #[test]
    fn test_take_damage() {
        let mut boss = sample();

        assert_eq!(boss.take_damage(100), 900);
        assert_eq!(boss.current_hp(), 900);
        assert!(!boss.is_defeated());
    }

    #[test]
    fn test_damage_saturates_at_zero() {
        let mut boss = sample();

        boss.take_damage(999);
        assert_eq!(boss.current_hp(), 1);

        // Overkill clamps rather than underflowing
        assert_eq!(boss.take_damage(500), 0);
        assert!(boss.is_defeated());

        assert_eq!(boss.take_damage(1), 0);
    }

    #[test]
    fn test_zero_hp_rejected() {
        let result = Boss::new("Empty", "img", 0, 10);
        assert_eq!(result, Err(GameError::InvalidStats { stat: "boss hp" }));
    }

    #[test]
    fn test_zero_attack_rejected() {
        let result = Boss::new("Harmless", "img", 10, 0);
        assert_eq!(
            result,
            Err(GameError::InvalidStats {
                stat: "boss attack damage"
            }),
        );
    }

    #[test]
    fn test_serialization() {
        let mut boss = sample();
        boss.take_damage(300);

        let json = serde_json::to_string(&boss).unwrap();
        let deserialized: Boss = serde_json::from_str(&json).unwrap();

        assert_eq!(boss, deserialized);
        assert_eq!(deserialized.current_hp(), 700);
    }
}
