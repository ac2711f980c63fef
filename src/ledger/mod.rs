//! Ownership ledger: who holds which token.
//!
//! ## Key Types
//!
//! - `Ledger`: Token arena keyed by id, with a secondary owner index
//!
//! The ledger enforces uniqueness (exactly one owner per token) and the
//! transfer rules. It knows nothing about templates or battle; callers
//! validate those concerns before touching it.

pub mod store;

pub use store::Ledger;
