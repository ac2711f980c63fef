//! Character tokens - minted, individually owned character instances.
//!
//! A `CharacterToken` is created by a successful mint and never destroyed:
//! a token at zero health persists as a historical record. Health only
//! decreases, and only along the battle path, so `current_hp` stays within
//! `[0, base_hp]` by construction.

use serde::{Deserialize, Serialize};

use crate::core::AccountId;

use super::definition::TemplateId;

/// Unique identifier for a minted token.
///
/// Ids are assigned monotonically starting at 1; zero is reserved so a
/// default-initialized id is never a live token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// One minted character instance.
///
/// Tracks the mutable side of a character: who holds it and how much health
/// it has left. The immutable side lives on the template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterToken {
    /// Unique id of this token.
    pub id: TokenId,

    /// The template this token was minted from.
    pub template: TemplateId,

    /// Current holder.
    pub owner: AccountId,

    current_hp: u32,
}

impl CharacterToken {
    /// Create a freshly minted token at full health.
    #[must_use]
    pub fn new(id: TokenId, template: TemplateId, owner: AccountId, base_hp: u32) -> Self {
        Self {
            id,
            template,
            owner,
            current_hp: base_hp,
        }
    }

    /// Current health.
    #[must_use]
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// A token at zero health is defeated and may not attack.
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
