//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the setup
//! and catalog types consumed by `skirmish-core`.

pub mod config;
pub mod factory;
pub mod scenario;
pub mod skills;
pub mod units;

pub use config::{ConfigLoader, ContentConfig};
pub use factory::ContentFactory;
pub use scenario::{Scenario, ScenarioEvent, ScenarioLoader, SpawnEntry};
pub use skills::SkillLoader;
pub use units::{UnitCatalog, UnitLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
