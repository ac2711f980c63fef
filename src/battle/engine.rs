//! One-round battle resolution.
//!
//! A round is attacker-then-counter:
//! 1. the character strikes the boss, saturating at zero
//! 2. if the strike defeats the boss, the round ends there - a boss does
//!    not counter the blow that finishes it
//! 3. otherwise the boss counters, saturating at zero
//!
//! Both writes are plain saturating subtractions, so once resolution starts
//! it cannot fail; the round commits as a unit.

use serde::{Deserialize, Serialize};

use crate::boss::Boss;
use crate::characters::{CharacterToken, TokenId};

/// The committed record of one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The attacking token.
    pub token: TokenId,

    /// Boss health after the strike.
    pub boss_hp: u32,

    /// Token health after the counter (unchanged if the boss fell).
    pub token_hp: u32,

    /// The strike dropped the boss to zero.
    pub boss_defeated: bool,

    /// The counter dropped the character to zero.
    pub character_defeated: bool,
}

impl RoundOutcome {
    /// Either party reached zero this round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.boss_defeated || self.character_defeated
    }
}

/// Resolve one round between a live token and a live boss.
///
/// Preconditions (validated by the caller): the token is owned by the
/// caller and not defeated, and the boss is not defeated.
pub(crate) fn resolve_round(
    token: &mut CharacterToken,
    attack_damage: u32,
    boss: &mut Boss,
) -> RoundOutcome {
    let boss_hp = boss.take_damage(attack_damage);

    let token_hp = if boss_hp == 0 {
        token.current_hp()
    } else {
        token.take_damage(boss.attack_damage())
    };

    RoundOutcome {
        token: token.id,
        boss_hp,
        token_hp,
        boss_defeated: boss_hp == 0,
        character_defeated: token_hp == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::TemplateId;
    use crate::core::AccountId;

    fn fixture(token_hp: u32, boss_hp: u32, boss_attack: u32) -> (CharacterToken, Boss) {
        let token = CharacterToken::new(
            TokenId::new(1),
            TemplateId::new(0),
            AccountId::new(7),
            token_hp,
        );
        let boss = Boss::new("Ace", "img", boss_hp, boss_attack).unwrap();
        (token, boss)
    }

    #[test]
    fn test_both_sides_struck() {
        let (mut token, mut boss) = fixture(400, 1000, 100);

        let outcome = resolve_round(&mut token, 100, &mut boss);

        assert_eq!(outcome.boss_hp, 900);
        assert_eq!(outcome.token_hp, 300);
        assert!(!outcome.is_terminal());
        assert_eq!(boss.current_hp(), 900);
        assert_eq!(token.current_hp(), 300);
    }

    #[test]
    fn test_no_counter_on_finishing_blow() {
        let (mut token, mut boss) = fixture(50, 80, 100);

        let outcome = resolve_round(&mut token, 100, &mut boss);

        assert!(outcome.boss_defeated);
        assert!(!outcome.character_defeated);
        // The token kept its health: the boss never countered
        assert_eq!(outcome.token_hp, 50);
        assert_eq!(token.current_hp(), 50);
    }

    #[test]
    fn test_counter_can_defeat_character() {
        let (mut token, mut boss) = fixture(60, 1000, 100);

        let outcome = resolve_round(&mut token, 100, &mut boss);

        assert!(!outcome.boss_defeated);
        assert!(outcome.character_defeated);
        assert_eq!(outcome.token_hp, 0);
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_overkill_clamps() {
        let (mut token, mut boss) = fixture(400, 30, 100);

        let outcome = resolve_round(&mut token, 100, &mut boss);

        assert_eq!(outcome.boss_hp, 0);
        assert!(outcome.boss_defeated);
    }

    #[test]
    fn test_exact_kill_is_a_kill() {
        let (mut token, mut boss) = fixture(400, 100, 100);

        let outcome = resolve_round(&mut token, 100, &mut boss);

        assert!(outcome.boss_defeated);
        assert_eq!(outcome.token_hp, 400);
    }

    #[test]
    fn test_outcome_serialization() {
        let (mut token, mut boss) = fixture(400, 1000, 100);
        let outcome = resolve_round(&mut token, 100, &mut boss);

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: RoundOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, deserialized);
    }
}
