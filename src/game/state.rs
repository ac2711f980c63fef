//! The game façade.
//!
//! `Game` owns the catalog, the boss, the ledger, and the event history,
//! and exposes the whole operation set directly. Every state-changing
//! method validates completely before its first write, so a rejected call
//! leaves no trace - not even a history entry.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::battle::{engine, RoundOutcome};
use crate::boss::Boss;
use crate::characters::{Catalog, TemplateId, TokenId};
use crate::core::{AccountId, GameError};
use crate::ledger::Ledger;
use crate::query::{BossView, TokenView};

use super::history::GameEvent;
use super::setup::GameSetup;

/// The authoritative game state and its operations.
///
/// ## Example
///
/// ```
/// use ace_arena::{AccountId, Game, GameError, GameSetup, TemplateId};
///
/// let setup = GameSetup::from_columns(
///     vec!["King of Spades".into()],
///     vec!["arweave://king".into()],
///     vec![400],
///     vec![100],
///     "Ace of Spades",
///     "arweave://ace",
///     1000,
///     100,
/// )
/// .unwrap();
///
/// let mut game = Game::new(setup).unwrap();
/// let player = AccountId::new(7);
///
/// let token = game.mint(player, TemplateId::new(0)).unwrap();
/// game.attack_boss(player, token).unwrap();
///
/// let held = game.holdings_of(player);
/// assert_eq!(held.len(), 1);
/// assert_eq!(held[0].current_hp, 300);
///
/// // A stranger cannot attack with someone else's token
/// let stranger = AccountId::new(8);
/// assert!(matches!(
///     game.attack_boss(stranger, token),
///     Err(GameError::NotOwner { .. })
/// ));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    catalog: Catalog,
    boss: Boss,
    ledger: Ledger,
    history: Vector<GameEvent>,
}

impl Game {
    /// Construct a game from its setup.
    ///
    /// Validates every template stat and the boss stats; fails with
    /// `InvalidStats` on any zero value.
    pub fn new(setup: GameSetup) -> Result<Self, GameError> {
        let catalog = Catalog::new(setup.templates)?;
        let boss = Boss::new(
            setup.boss.name,
            setup.boss.image,
            setup.boss.max_hp,
            setup.boss.attack_damage,
        )?;

        Ok(Self {
            catalog,
            boss,
            ledger: Ledger::new(),
            history: Vector::new(),
        })
    }

    // === Read accessors ===

    /// The immutable template catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The boss.
    #[must_use]
    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    /// The ownership ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Every committed transaction, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    // === Operations ===

    /// Mint a new token from `template`, owned by `caller`.
    ///
    /// Any account may mint any number of tokens, repeats of the same
    /// template included. Fails with `InvalidTemplate` on a bad index and
    /// `InvalidRecipient` for the null account.
    pub fn mint(
        &mut self,
        caller: AccountId,
        template: TemplateId,
    ) -> Result<TokenId, GameError> {
        if !self.catalog.contains(template) {
            return Err(GameError::InvalidTemplate(template));
        }
        let base_hp = self.catalog.get(template)?.base_hp;

        let token = self.ledger.mint(caller, template, base_hp)?;
        self.history.push_back(GameEvent::CharacterMinted {
            owner: caller,
            token,
            template,
        });

        Ok(token)
    }

    /// Atomically reassign ownership of `token` from `from` to `to`.
    ///
    /// Ownership is orthogonal to health: defeated tokens transfer like
    /// any other. Fails with `NotOwner` or `InvalidRecipient`.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        token: TokenId,
    ) -> Result<(), GameError> {
        self.ledger.transfer(from, to, token)?;
        self.history
            .push_back(GameEvent::CharacterTransferred { from, to, token });
        Ok(())
    }

    /// Fight one full round with `token` against the boss.
    ///
    /// The caller must own a non-defeated token and the boss must still be
    /// standing. On success the committed round is returned and recorded
    /// in history; on failure nothing changes.
    pub fn attack_boss(
        &mut self,
        caller: AccountId,
        token: TokenId,
    ) -> Result<RoundOutcome, GameError> {
        let (template, token_defeated) = match self.ledger.get(token) {
            Some(t) if t.owner == caller => (t.template, t.is_defeated()),
            _ => return Err(GameError::NotOwner { token, caller }),
        };
        if token_defeated {
            return Err(GameError::CharacterDefeated(token));
        }
        if self.boss.is_defeated() {
            return Err(GameError::BossAlreadyDefeated);
        }

        let attack_damage = self.catalog.get(template)?.attack_damage;
        let attacker = self
            .ledger
            .get_mut(token)
            .ok_or(GameError::NotOwner { token, caller })?;

        let outcome = engine::resolve_round(attacker, attack_damage, &mut self.boss);
        self.history.push_back(GameEvent::RoundFought(outcome));

        Ok(outcome)
    }

    // === Queries ===

    /// Everything `owner` currently holds, ordered by token id.
    ///
    /// Empty (not an error) when the account owns nothing.
    #[must_use]
    pub fn holdings_of(&self, owner: AccountId) -> Vec<TokenView> {
        self.ledger
            .tokens_owned_by(owner)
            .iter()
            .filter_map(|&id| {
                let token = self.ledger.get(id)?;
                let template = self.catalog.get(token.template).ok()?;
                Some(TokenView::from_parts(token, template))
            })
            .collect()
    }

    /// Snapshot of the boss.
    #[must_use]
    pub fn boss_view(&self) -> BossView {
        BossView::from_boss(&self.boss)
    }

    // === Persistence ===

    /// Serialize the complete committed state.
    pub fn snapshot(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Rebuild a game from a snapshot.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
