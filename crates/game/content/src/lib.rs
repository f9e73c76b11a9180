//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Unit catalog (entity setups keyed by unit id)
//! - Skill catalog (skill definitions, usable as a skill factory)
//! - Scenarios (players, starting units, scripted events)
//! - Content configuration (file layout of a data directory)
//!
//! and a directory-backed asset oracle for resolving entity icons.

pub mod assets;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use assets::DirectoryAssets;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentConfig, ContentFactory, Scenario, ScenarioEvent, ScenarioLoader,
    SkillLoader, SpawnEntry, UnitCatalog, UnitLoader,
};
