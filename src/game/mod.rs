//! The game façade: construction, operations, history, shared access.
//!
//! ## Key Types
//!
//! - `GameSetup` / `BossSpec`: Construction parameters (column-array form
//!   included, matching the deployment call shape)
//! - `Game`: The façade owning catalog, boss, ledger, and history
//! - `GameEvent`: One history entry per committed transaction
//! - `SharedGame`: `Arc<Mutex<Game>>` handle for concurrent callers
//!
//! The operation set is fixed and small, so the façade exposes it as plain
//! methods - no dispatch layer.

pub mod history;
pub mod setup;
pub mod shared;
pub mod state;

pub use history::GameEvent;
pub use setup::{BossSpec, GameSetup};
pub use shared::SharedGame;
pub use state::Game;
