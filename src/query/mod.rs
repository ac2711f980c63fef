//! Read-only state views.
//!
//! ## Key Types
//!
//! - `TokenView`: Full state of one owned token, template fields resolved
//! - `BossView`: Snapshot of the boss
//!
//! Views are owned snapshots derived from committed state; building one
//! never mutates anything, and holding one never blocks a writer.

pub mod views;

pub use views::{BossView, TokenView};
