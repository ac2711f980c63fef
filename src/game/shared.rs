//! Thread-safe game handle.
//!
//! `SharedGame` wraps a `Game` in `Arc<Mutex<..>>` so concurrent callers
//! get the same serialized-transaction discipline as a single `&mut Game`:
//! one operation at a time, each committing or rejecting atomically.
//! Queries take the lock too and therefore only ever observe committed
//! state.

use std::sync::{Arc, Mutex, PoisonError};

use crate::battle::RoundOutcome;
use crate::characters::{TemplateId, TokenId};
use crate::core::{AccountId, GameError};
use crate::query::{BossView, TokenView};

use super::state::Game;

/// Cloneable handle to a mutex-guarded [`Game`].
///
/// ```
/// use ace_arena::{AccountId, GameSetup, Game, SharedGame, TemplateId};
///
/// let setup = GameSetup::from_columns(
///     vec!["King".into()], vec!["img".into()], vec![400], vec![100],
///     "Ace", "img", 1000, 100,
/// ).unwrap();
/// let shared = SharedGame::new(Game::new(setup).unwrap());
///
/// let player = AccountId::new(7);
/// let token = shared.mint(player, TemplateId::new(0)).unwrap();
/// shared.attack_boss(player, token).unwrap();
///
/// assert_eq!(shared.boss_view().current_hp, 900);
/// ```
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Wrap a game for shared access.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    // Operations validate before writing, so state behind a poisoned lock
    // is still fully committed; recover it rather than propagating.
    fn lock(&self) -> std::sync::MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint a token. See [`Game::mint`].
    pub fn mint(&self, caller: AccountId, template: TemplateId) -> Result<TokenId, GameError> {
        self.lock().mint(caller, template)
    }

    /// Transfer a token. See [`Game::transfer`].
    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        token: TokenId,
    ) -> Result<(), GameError> {
        self.lock().transfer(from, to, token)
    }

    /// Fight one round. See [`Game::attack_boss`].
    pub fn attack_boss(
        &self,
        caller: AccountId,
        token: TokenId,
    ) -> Result<RoundOutcome, GameError> {
        self.lock().attack_boss(caller, token)
    }

    /// Holdings query. See [`Game::holdings_of`].
    #[must_use]
    pub fn holdings_of(&self, owner: AccountId) -> Vec<TokenView> {
        self.lock().holdings_of(owner)
    }

    /// Boss snapshot. See [`Game::boss_view`].
    #[must_use]
    pub fn boss_view(&self) -> BossView {
        self.lock().boss_view()
    }

    /// Run a closure against the locked game for anything else read-only
    /// (history, catalog, ledger accessors).
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.lock())
    }
}
