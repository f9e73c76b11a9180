//! Unit catalog loader.
//!
//! `units.ron` maps a unit id to the attributes an entity is built from:
//!
//! ```ron
//! {
//!     "peasant": (
//!         name: "Peasant",
//!         race: human,
//!         max_life: 30,
//!         fov: 4,
//!         icon: "peasant.png",
//!         skills: [(panel: 0, kind: move, priority: 0)],
//!     ),
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use skirmish_core::EntitySetup;

use crate::loaders::{LoadResult, read_file};

/// Entity setups keyed by unit id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    units: BTreeMap<String, EntitySetup>,
}

impl UnitCatalog {
    pub fn get(&self, id: &str) -> Option<&EntitySetup> {
        self.units.get(id)
    }

    /// Unit ids in lexical order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntitySetup)> {
        self.units.iter().map(|(id, setup)| (id.as_str(), setup))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Loader for unit catalogs from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load the unit catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<UnitCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a unit catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<UnitCatalog> {
        let units: BTreeMap<String, EntitySetup> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        tracing::debug!(units = units.len(), "loaded unit catalog");
        Ok(UnitCatalog { units })
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::{Race, SkillKind, SkillPanel};

    use super::*;

    const UNITS: &str = r#"{
        "grunt": (
            name: "Grunt",
            race: orc,
            max_life: 60,
            fov: 4,
            icon: "grunt.png",
            skills: [
                (panel: 0, kind: move, priority: 0),
                (panel: 0, kind: attack, priority: 1),
            ],
        ),
        "farm": (
            name: "Farm",
            max_life: 400,
            fov: 1,
            icon: "farm.png",
        ),
    }"#;

    #[test]
    fn parses_units_with_defaults() {
        let catalog = UnitLoader::parse(UNITS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["farm", "grunt"]);

        let grunt = catalog.get("grunt").unwrap();
        assert_eq!(grunt.race, Race::Orc);
        assert_eq!(grunt.max_life, 60);
        assert_eq!(grunt.skills.len(), 2);
        assert_eq!(grunt.skills[1].kind, SkillKind::Attack);
        assert_eq!(grunt.skills[1].panel, SkillPanel(0));

        let farm = catalog.get("farm").unwrap();
        assert_eq!(farm.race, Race::Human);
        assert!(farm.skills.is_empty());
    }

    #[test]
    fn invalid_values_are_kept_for_entity_validation() {
        let catalog = UnitLoader::parse(
            r#"{ "ghost": (name: "Ghost", max_life: -3, fov: 2, icon: "ghost.png") }"#,
        )
        .unwrap();
        assert_eq!(catalog.get("ghost").unwrap().max_life, -3);
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = UnitLoader::parse(r#"{ "grunt": (name: "Grunt") }"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse unit catalog RON"));
    }
}
