//! Battle resolution: one call, one full round.
//!
//! ## Key Types
//!
//! - `RoundOutcome`: The committed record of a resolved round
//!
//! The resolution function assumes its preconditions (live token, live
//! boss) were validated by the façade; it only moves health and reports
//! what happened.

pub mod engine;

pub use engine::RoundOutcome;
