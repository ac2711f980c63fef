//! Game construction parameters.
//!
//! A game is configured once: the template list and the boss. The
//! column-array constructor mirrors the shape of the deployment call that
//! passes names, images, health values, and attack values as parallel
//! arrays, and rejects inconsistent lengths before anything is built.

use serde::{Deserialize, Serialize};

use crate::characters::CharacterTemplate;
use crate::core::GameError;

/// Boss construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossSpec {
    /// Display name.
    pub name: String,

    /// Image locator.
    pub image: String,

    /// Starting (and maximum) health.
    pub max_hp: u32,

    /// Damage dealt per counter-attack.
    pub attack_damage: u32,
}

impl BossSpec {
    /// Create boss parameters.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        max_hp: u32,
        attack_damage: u32,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            max_hp,
            attack_damage,
        }
    }
}

/// Everything a game is constructed from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// The template list, in catalog order.
    pub templates: Vec<CharacterTemplate>,

    /// The boss.
    pub boss: BossSpec,
}

impl GameSetup {
    /// Create a setup from an explicit template list and boss spec.
    #[must_use]
    pub fn new(templates: Vec<CharacterTemplate>, boss: BossSpec) -> Self {
        Self { templates, boss }
    }

    /// Build a setup from parallel template columns plus boss parameters.
    ///
    /// Fails with `ColumnMismatch` when the four columns differ in length.
    /// Stat validation happens at `Game::new`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_columns(
        names: Vec<String>,
        images: Vec<String>,
        hps: Vec<u32>,
        attacks: Vec<u32>,
        boss_name: impl Into<String>,
        boss_image: impl Into<String>,
        boss_hp: u32,
        boss_attack: u32,
    ) -> Result<Self, GameError> {
        if names.len() != images.len()
            || names.len() != hps.len()
            || names.len() != attacks.len()
        {
            return Err(GameError::ColumnMismatch {
                names: names.len(),
                images: images.len(),
                hps: hps.len(),
                attacks: attacks.len(),
            });
        }

        let templates = names
            .into_iter()
            .zip(images)
            .zip(hps.into_iter().zip(attacks))
            .map(|((name, image), (hp, attack))| CharacterTemplate::new(name, image, hp, attack))
            .collect();

        Ok(Self {
            templates,
            boss: BossSpec::new(boss_name, boss_image, boss_hp, boss_attack),
        })
    }
}
