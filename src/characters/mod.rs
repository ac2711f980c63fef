//! Character system: templates, the catalog, and minted tokens.
//!
//! ## Key Types
//!
//! - `TemplateId`: Index into the catalog
//! - `CharacterTemplate`: Immutable character blueprint (name, image, stats)
//! - `Catalog`: The fixed template list, read-only after construction
//! - `TokenId`: Identifier for a minted token
//! - `CharacterToken`: One owned character instance with mutable health
//!
//! Templates never change once the catalog is built. All mutable state
//! (health, ownership) lives on the token.

pub mod catalog;
pub mod definition;
pub mod token;

pub use catalog::Catalog;
pub use definition::{CharacterTemplate, TemplateId};
pub use token::{CharacterToken, TokenId};
