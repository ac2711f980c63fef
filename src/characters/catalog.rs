//! The character catalog: the fixed template list.
//!
//! The `Catalog` is built once at game construction and never mutated.
//! Templates are addressed by their position, `TemplateId(n)` for the nth
//! entry.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

use super::definition::{CharacterTemplate, TemplateId};

/// Immutable set of playable character templates.
///
/// Read-only after construction: lookups and iteration only.
///
/// ## Example
///
/// ```
/// use ace_arena::{Catalog, CharacterTemplate, TemplateId};
///
/// let catalog = Catalog::new(vec![
///     CharacterTemplate::new("King of Spades", "arweave://spades", 400, 100),
///     CharacterTemplate::new("King of Hearts", "arweave://hearts", 300, 150),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(TemplateId::new(1)).unwrap().base_hp, 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    templates: Vec<CharacterTemplate>,
}

impl Catalog {
    /// Build a catalog from a template list.
    ///
    /// Fails with `InvalidStats` if any template has a zero health or
    /// attack value.
    pub fn new(templates: Vec<CharacterTemplate>) -> Result<Self, GameError> {
        for template in &templates {
            if template.base_hp == 0 {
                return Err(GameError::InvalidStats { stat: "base hp" });
            }
            if template.attack_damage == 0 {
                return Err(GameError::InvalidStats {
                    stat: "attack damage",
                });
            }
        }
        Ok(Self { templates })
    }

    /// Get the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Get a template by ID.
    ///
    /// Fails with `OutOfRange` when the index is past the end of the list.
    pub fn get(&self, id: TemplateId) -> Result<&CharacterTemplate, GameError> {
        self.templates
            .get(id.index())
            .ok_or(GameError::OutOfRange(id))
    }

    /// Check if a template ID is within the catalog.
    #[must_use]
    pub fn contains(&self, id: TemplateId) -> bool {
        id.index() < self.templates.len()
    }

    /// Iterate over all templates with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateId, &CharacterTemplate)> {
        self.templates
            .iter()
            .enumerate()
            .map(|(i, t)| (TemplateId::new(i as u32), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            CharacterTemplate::new("Spades", "img-a", 400, 100),
            CharacterTemplate::new("Hearts", "img-b", 300, 150),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = sample();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.contains(TemplateId::new(0)));
        assert!(catalog.contains(TemplateId::new(1)));
        assert!(!catalog.contains(TemplateId::new(2)));

        assert_eq!(catalog.get(TemplateId::new(0)).unwrap().name, "Spades");
    }

    #[test]
    fn test_out_of_range() {
        let catalog = sample();

        assert_eq!(
            catalog.get(TemplateId::new(2)),
            Err(GameError::OutOfRange(TemplateId::new(2))),
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(!catalog.contains(TemplateId::new(0)));
    }

    #[test]
    fn test_zero_hp_rejected() {
        let result = Catalog::new(vec![CharacterTemplate::new("Ghost", "img", 0, 100)]);
        assert_eq!(result, Err(GameError::InvalidStats { stat: "base hp" }));
    }

    #[test]
    fn test_zero_attack_rejected() {
        let result = Catalog::new(vec![CharacterTemplate::new("Pacifist", "img", 100, 0)]);
        assert_eq!(
            result,
            Err(GameError::InvalidStats {
                stat: "attack damage"
            }),
        );
    }

    #[test]
    fn test_iteration() {
        let catalog = sample();

        let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![TemplateId::new(0), TemplateId::new(1)]);

        let names: Vec<_> = catalog.iter().map(|(_, t)| t.name.as_str()).collect();
        assert_eq!(names, vec!["Spades", "Hearts"]);
    }

    #[test]
    fn test_serialization() {
        let catalog = sample();
        let json = serde_json::to_string(&catalog).unwrap();
        let deserialized: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, deserialized);
    }
}
