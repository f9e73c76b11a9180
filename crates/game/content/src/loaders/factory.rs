//! Content factory for building catalogs and oracles from a data directory.

use std::path::{Path, PathBuf};

use skirmish_core::SkillCatalog;

use crate::assets::DirectoryAssets;
use crate::loaders::{
    ConfigLoader, ContentConfig, LoadResult, Scenario, ScenarioLoader, SkillLoader, UnitCatalog,
    UnitLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── units.ron
/// ├── skills.ron
/// ├── scenarios/
/// │   └── border_skirmish.ron
/// └── entities/
///     ├── human/
///     └── orc/
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    config: ContentConfig,
}

impl ContentFactory {
    /// Creates a factory with the default layout.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config: ContentConfig::default(),
        }
    }

    /// Creates a factory, reading `config.toml` when present.
    pub fn open(data_dir: impl Into<PathBuf>) -> LoadResult<Self> {
        let data_dir = data_dir.into();
        let config_path = data_dir.join("config.toml");
        let config = if config_path.exists() {
            ConfigLoader::load(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config.toml, using defaults");
            ContentConfig::default()
        };

        Ok(Self { data_dir, config })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Load the unit catalog.
    pub fn load_units(&self) -> LoadResult<UnitCatalog> {
        UnitLoader::load(&self.data_dir.join(&self.config.units_file))
    }

    /// Load the skill catalog.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.data_dir.join(&self.config.skills_file))
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Asset oracle rooted at the configured entities directory.
    pub fn assets(&self) -> DirectoryAssets {
        DirectoryAssets::new(self.data_dir.join(&self.config.entities_dir))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
