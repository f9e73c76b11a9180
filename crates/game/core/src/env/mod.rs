//! Traits describing the collaborators an entity needs from the outside world.
//!
//! Oracles expose read-only services (asset resolution, skill creation). The
//! [`Env`] aggregate bundles them so entity construction can reach everything
//! it needs without hard coupling to concrete implementations. Mutable
//! collaborators ([`EngineLink`], [`PopulationTracker`](crate::player::PopulationTracker))
//! are passed separately because they are owned per entity or per match.
mod assets;
mod error;
mod link;
mod setup;

pub use assets::{AssetError, AssetOracle, IconHandle};
pub use error::OracleError;
pub use link::{EngineLink, EntityFlags, HeadlessLink};
pub use setup::{EntitySetup, SkillAssignment};

use crate::skill::SkillFactory;

/// Aggregates the read-only oracles required to build entities.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    assets: Option<&'a dyn AssetOracle>,
    skills: Option<&'a dyn SkillFactory>,
}

impl<'a> Env<'a> {
    pub fn new(assets: Option<&'a dyn AssetOracle>, skills: Option<&'a dyn SkillFactory>) -> Self {
        Self { assets, skills }
    }

    pub fn with_all(assets: &'a dyn AssetOracle, skills: &'a dyn SkillFactory) -> Self {
        Self::new(Some(assets), Some(skills))
    }

    pub fn empty() -> Self {
        Self {
            assets: None,
            skills: None,
        }
    }

    /// Returns the AssetOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AssetsNotAvailable` if no asset oracle was provided.
    pub fn assets(&self) -> Result<&'a dyn AssetOracle, OracleError> {
        self.assets.ok_or(OracleError::AssetsNotAvailable)
    }

    /// Returns the SkillFactory, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill factory was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillFactory, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("assets", &self.assets.is_some())
            .field("skills", &self.skills.is_some())
            .finish()
    }
}
