//! View structs for holdings and boss queries.
//!
//! A holdings query answers "what does this account currently own, and in
//! what state" - the full per-token record, not a boolean. Template fields
//! are resolved into the view so a caller needs no second lookup.

use serde::{Deserialize, Serialize};

use crate::boss::Boss;
use crate::characters::{CharacterTemplate, CharacterToken, TemplateId, TokenId};
use crate::core::AccountId;

/// Full state of one owned token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    /// The token's id.
    pub id: TokenId,

    /// Current holder.
    pub owner: AccountId,

    /// Template the token was minted from.
    pub template: TemplateId,

    /// Template name.
    pub name: String,

    /// Template image locator.
    pub image: String,

    /// Current health.
    pub current_hp: u32,

    /// Maximum health (the template's base).
    pub max_hp: u32,

    /// Damage dealt per strike.
    pub attack_damage: u32,
}

impl TokenView {
    pub(crate) fn from_parts(token: &CharacterToken, template: &CharacterTemplate) -> Self {
        Self {
            id: token.id,
            owner: token.owner,
            template: token.template,
            name: template.name.clone(),
            image: template.image.clone(),
            current_hp: token.current_hp(),
            max_hp: template.base_hp,
            attack_damage: template.attack_damage,
        }
    }

    /// A token at zero health is defeated.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }
}

/// Snapshot of the boss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossView {
    /// Display name.
    pub name: String,

    /// Image locator.
    pub image: String,

    /// Current health.
    pub current_hp: u32,

    /// Maximum health.
    pub max_hp: u32,

    /// Damage dealt per counter-attack.
    pub attack_damage: u32,

    /// The boss has reached zero health.
    pub defeated: bool,
}

impl BossView {
    pub(crate) fn from_boss(boss: &Boss) -> Self {
        Self {
            name: boss.name().to_string(),
            image: boss.image().to_string(),
            current_hp: boss.current_hp(),
            max_hp: boss.max_hp(),
            attack_damage: boss.attack_damage(),
            defeated: boss.is_defeated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_view_resolves_template() {
        let template = CharacterTemplate::new("King of Clubs", "arweave://clubs", 400, 100);
        let mut token = CharacterToken::new(
            TokenId::new(3),
            TemplateId::new(1),
            AccountId::new(9),
            template.base_hp,
        );
        token.take_damage(150);

        let view = TokenView::from_parts(&token, &template);

        assert_eq!(view.id, TokenId::new(3));
        assert_eq!(view.owner, AccountId::new(9));
        assert_eq!(view.name, "King of Clubs");
        assert_eq!(view.current_hp, 250);
        assert_eq!(view.max_hp, 400);
        assert!(!view.is_defeated());
    }

    #[test]
    fn test_boss_view() {
        let mut boss = Boss::new("Ace", "arweave://ace", 1000, 100).unwrap();
        boss.take_damage(1000);

        let view = BossView::from_boss(&boss);

        assert_eq!(view.current_hp, 0);
        assert_eq!(view.max_hp, 1000);
        assert!(view.defeated);
    }

    #[test]
    fn test_view_serialization() {
        let template = CharacterTemplate::new("King", "img", 400, 100);
        let token = CharacterToken::new(
            TokenId::new(1),
            TemplateId::new(0),
            AccountId::new(7),
            400,
        );

        let view = TokenView::from_parts(&token, &template);
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: TokenView = serde_json::from_str(&json).unwrap();

        assert_eq!(view, deserialized);
    }
}
