//! Skill catalog loader.

use std::path::Path;

use skirmish_core::{SkillCatalog, SkillDefinition};

use crate::loaders::{LoadResult, read_file};

/// Loader for skill definitions from RON files.
///
/// The file holds a list of [`SkillDefinition`]s. When a kind appears twice,
/// the later entry wins and a warning is logged.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a skill catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a skill catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let definitions: Vec<SkillDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let mut catalog = SkillCatalog::new();
        for definition in definitions {
            let kind = definition.kind;
            if catalog.register(definition).is_some() {
                tracing::warn!(%kind, "duplicate skill definition, keeping the last one");
            }
        }

        tracing::debug!(skills = catalog.len(), "loaded skill catalog");
        Ok(catalog)
    }
}
