//! The boss: the singleton shared adversary.
//!
//! ## Key Types
//!
//! - `Boss`: Immutable descriptive fields and stats, plus the one piece of
//!   mutable state in the module - its current health
//!
//! Health only moves along the battle path; there is no external mutator.

pub mod entity;

pub use entity::Boss;
