//! Character templates - static character data.
//!
//! `CharacterTemplate` holds the immutable properties of a playable
//! character: its name, its image locator, and the stats every token minted
//! from it starts with. Instance-specific data (current health, owner) is
//! stored separately in `CharacterToken`.

use serde::{Deserialize, Serialize};

/// Index of a character template in the catalog.
///
/// This identifies the blueprint (e.g. "King of Spades"), not a specific
/// minted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as a usize for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Static character blueprint.
///
/// Fixed at catalog construction; every token minted from this template
/// starts at `base_hp` and strikes for `attack_damage`.
///
/// ```
/// use ace_arena::CharacterTemplate;
///
/// let king = CharacterTemplate::new("King of Spades", "arweave://king", 400, 100);
/// assert_eq!(king.base_hp, 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    /// Display name.
    pub name: String,

    /// Content locator for the character image.
    pub image: String,

    /// Starting (and maximum) health of minted tokens.
    pub base_hp: u32,

    /// Damage dealt per strike.
    pub attack_damage: u32,
}

impl CharacterTemplate {
    /// Create a new character template.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        base_hp: u32,
        attack_damage: u32,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            base_hp,
            attack_damage,
        }
    }
}
