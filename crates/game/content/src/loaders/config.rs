//! Content configuration loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Where content lives inside a data directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `<race>/<icon>` assets, relative to the data directory.
    pub entities_dir: String,
    /// Unit catalog file name.
    pub units_file: String,
    /// Skill catalog file name.
    pub skills_file: String,
}

impl ContentConfig {
    pub const DEFAULT_ENTITIES_DIR: &'static str = "entities";
    pub const DEFAULT_UNITS_FILE: &'static str = "units.ron";
    pub const DEFAULT_SKILLS_FILE: &'static str = "skills.ron";
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            entities_dir: Self::DEFAULT_ENTITIES_DIR.to_string(),
            units_file: Self::DEFAULT_UNITS_FILE.to_string(),
            skills_file: Self::DEFAULT_SKILLS_FILE.to_string(),
        }
    }
}

/// Loader for content configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`ContentConfig::default`].
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        let config: ContentConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
