//! # ace-arena
//!
//! A card-character ownership and boss-raid engine: players mint character
//! tokens from an immutable catalog, battle a shared boss one round at a
//! time, transfer tokens between accounts, and query everything an account
//! currently holds.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: The catalog and the boss are fixed
//!    at construction via [`GameSetup`]. The engine hardcodes no characters.
//!
//! 2. **Serialized Transactions**: Every state-changing operation takes
//!    `&mut Game`, validates completely, then writes. A rejected call
//!    commits nothing. [`SharedGame`] extends the same discipline to
//!    concurrent callers.
//!
//! 3. **Saturating Arithmetic**: Health never leaves `[0, max]`. Damage
//!    saturates at zero on both sides of a round.
//!
//! ## Modules
//!
//! - `core`: Account ids and the error type
//! - `characters`: Character templates, the catalog, minted tokens
//! - `boss`: The singleton shared adversary
//! - `ledger`: Token ownership store (arena + owner index)
//! - `battle`: One-round battle resolution
//! - `query`: Read-only state views
//! - `game`: The façade, construction, history, shared handle, snapshots
//!
//! ## Example
//!
//! ```
//! use ace_arena::{AccountId, Game, GameSetup, TemplateId};
//!
//! let setup = GameSetup::from_columns(
//!     vec!["King of Spades".into()],
//!     vec!["arweave://king-of-spades".into()],
//!     vec![400],
//!     vec![100],
//!     "Ace of Spades",
//!     "arweave://ace-of-spades",
//!     1000,
//!     100,
//! )
//! .unwrap();
//!
//! let mut game = Game::new(setup).unwrap();
//! let player = AccountId::new(7);
//!
//! let token = game.mint(player, TemplateId::new(0)).unwrap();
//! let round = game.attack_boss(player, token).unwrap();
//!
//! assert_eq!(round.boss_hp, 900);
//! assert_eq!(round.token_hp, 300);
//! ```

pub mod core;
pub mod characters;
pub mod boss;
pub mod ledger;
pub mod battle;
pub mod query;
pub mod game;

// Re-export commonly used types
pub use crate::core::{AccountId, GameError};

pub use crate::characters::{
    Catalog, CharacterTemplate, CharacterToken, TemplateId, TokenId,
};

pub use crate::boss::Boss;

pub use crate::ledger::Ledger;

pub use crate::battle::RoundOutcome;

pub use crate::query::{BossView, TokenView};

pub use crate::game::{BossSpec, Game, GameEvent, GameSetup, SharedGame};
