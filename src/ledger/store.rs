//! The token store.
//!
//! Two maps, kept consistent on every write:
//! - the arena: `TokenId -> CharacterToken`, the authoritative record
//! - the owner index: `AccountId -> [TokenId]`, sorted by id, for
//!   holdings queries without a full scan
//!
//! Token ids are assigned monotonically starting at 1. Tokens are never
//! removed; a defeated token stays in the arena.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::characters::{CharacterToken, TemplateId, TokenId};
use crate::core::{AccountId, GameError};

/// Token ownership store.
///
/// Exactly one owner per token at any time; an account may hold zero, one,
/// or many tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ledger {
    tokens: FxHashMap<TokenId, CharacterToken>,
    by_owner: FxHashMap<AccountId, SmallVec<[TokenId; 4]>>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: FxHashMap::default(),
            by_owner: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Number of tokens ever minted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if nothing has been minted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Create a new token owned by `owner`, starting at `base_hp`.
    ///
    /// The template index must already be validated against the catalog.
    /// Fails with `InvalidRecipient` for the null account.
    pub(crate) fn mint(
        &mut self,
        owner: AccountId,
        template: TemplateId,
        base_hp: u32,
    ) -> Result<TokenId, GameError> {
        if owner.is_null() {
            return Err(GameError::InvalidRecipient(owner));
        }

        let id = TokenId::new(self.next_id);
        self.next_id += 1;

        self.tokens
            .insert(id, CharacterToken::new(id, template, owner, base_hp));
        // Ids grow monotonically, so pushing keeps the index sorted.
        self.by_owner.entry(owner).or_default().push(id);

        Ok(id)
    }

    /// Atomically reassign ownership of `token` from `from` to `to`.
    ///
    /// Fails with `NotOwner` when `from` does not hold the token (including
    /// a token that was never minted) and `InvalidRecipient` for the null
    /// account. Health is untouched; defeated tokens transfer like any
    /// other.
    pub(crate) fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        token: TokenId,
    ) -> Result<(), GameError> {
        if to.is_null() {
            return Err(GameError::InvalidRecipient(to));
        }
        match self.tokens.get(&token) {
            Some(t) if t.owner == from => {}
            _ => return Err(GameError::NotOwner { token, caller: from }),
        }

        if from == to {
            return Ok(());
        }

        if let Some(t) = self.tokens.get_mut(&token) {
            t.owner = to;
        }

        if let Some(held) = self.by_owner.get_mut(&from) {
            held.retain(|t| *t != token);
            if held.is_empty() {
                self.by_owner.remove(&from);
            }
        }

        let held = self.by_owner.entry(to).or_default();
        let pos = held.binary_search(&token).unwrap_or_else(|p| p);
        held.insert(pos, token);

        Ok(())
    }

    /// Current owner of a token, or `None` if it was never minted.
    #[must_use]
    pub fn owner_of(&self, token: TokenId) -> Option<AccountId> {
        self.tokens.get(&token).map(|t| t.owner)
    }

    /// Token ids held by an account, sorted ascending. Empty when the
    /// account owns nothing.
    #[must_use]
    pub fn tokens_owned_by(&self, owner: AccountId) -> &[TokenId] {
        self.by_owner.get(&owner).map_or(&[], |held| held.as_slice())
    }

    /// Get a token by id.
    #[must_use]
    pub fn get(&self, token: TokenId) -> Option<&CharacterToken> {
        self.tokens.get(&token)
    }

    /// Get a mutable token by id. Battle path only.
    pub(crate) fn get_mut(&mut self, token: TokenId) -> Option<&mut CharacterToken> {
        self.tokens.get_mut(&token)
    }

    /// Iterate over all tokens in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterToken> {
        self.tokens.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: AccountId = AccountId(7);
    const BOB: AccountId = AccountId(8);

    fn minted() -> (Ledger, TokenId) {
        let mut ledger = Ledger::new();
        let token = ledger.mint(ALICE, TemplateId::new(0), 400).unwrap();
        (ledger, token)
    }

    #[test]
    fn test_mint_assigns_ids_from_one() {
        let mut ledger = Ledger::new();

        let first = ledger.mint(ALICE, TemplateId::new(0), 400).unwrap();
        let second = ledger.mint(ALICE, TemplateId::new(1), 300).unwrap();

        assert_eq!(first, TokenId::new(1));
        assert_eq!(second, TokenId::new(2));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_mint_to_null_rejected() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.mint(AccountId::NULL, TemplateId::new(0), 400),
            Err(GameError::InvalidRecipient(AccountId::NULL)),
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_mint_sets_owner_and_health() {
        let (ledger, token) = minted();

        let t = ledger.get(token).unwrap();
        assert_eq!(t.owner, ALICE);
        assert_eq!(t.current_hp(), 400);
        assert_eq!(ledger.owner_of(token), Some(ALICE));
        assert_eq!(ledger.tokens_owned_by(ALICE), &[token]);
    }

    #[test]
    fn test_same_template_twice() {
        let mut ledger = Ledger::new();

        let a = ledger.mint(ALICE, TemplateId::new(0), 400).unwrap();
        let b = ledger.mint(ALICE, TemplateId::new(0), 400).unwrap();

        assert_ne!(a, b);
        assert_eq!(ledger.tokens_owned_by(ALICE), &[a, b]);
    }

    #[test]
    fn test_transfer_moves_token() {
        let (mut ledger, token) = minted();

        ledger.transfer(ALICE, BOB, token).unwrap();

        assert_eq!(ledger.owner_of(token), Some(BOB));
        assert!(ledger.tokens_owned_by(ALICE).is_empty());
        assert_eq!(ledger.tokens_owned_by(BOB), &[token]);
    }

    #[test]
    fn test_transfer_not_owner() {
        let (mut ledger, token) = minted();

        assert_eq!(
            ledger.transfer(BOB, ALICE, token),
            Err(GameError::NotOwner {
                token,
                caller: BOB
            }),
        );
        assert_eq!(ledger.owner_of(token), Some(ALICE));
    }

    #[test]
    fn test_transfer_unknown_token() {
        let mut ledger = Ledger::new();
        let missing = TokenId::new(99);

        assert_eq!(
            ledger.transfer(ALICE, BOB, missing),
            Err(GameError::NotOwner {
                token: missing,
                caller: ALICE
            }),
        );
    }

    #[test]
    fn test_transfer_to_null_rejected() {
        let (mut ledger, token) = minted();

        assert_eq!(
            ledger.transfer(ALICE, AccountId::NULL, token),
            Err(GameError::InvalidRecipient(AccountId::NULL)),
        );
        assert_eq!(ledger.owner_of(token), Some(ALICE));
    }

    #[test]
    fn test_self_transfer_is_noop() {
        let (mut ledger, token) = minted();

        ledger.transfer(ALICE, ALICE, token).unwrap();

        assert_eq!(ledger.owner_of(token), Some(ALICE));
        assert_eq!(ledger.tokens_owned_by(ALICE), &[token]);
    }

    #[test]
    fn test_owner_index_stays_sorted() {
        let mut ledger = Ledger::new();

        let a = ledger.mint(ALICE, TemplateId::new(0), 400).unwrap();
        let b = ledger.mint(BOB, TemplateId::new(0), 400).unwrap();
        let c = ledger.mint(ALICE, TemplateId::new(0), 400).unwrap();

        // BOB's token lands between ALICE's two; index stays ordered by id
        ledger.transfer(BOB, ALICE, b).unwrap();
        assert_eq!(ledger.tokens_owned_by(ALICE), &[a, b, c]);
    }

    #[test]
    fn test_empty_holdings() {
        let ledger = Ledger::new();
        assert!(ledger.tokens_owned_by(ALICE).is_empty());
        assert_eq!(ledger.owner_of(TokenId::new(1)), None);
    }
}
