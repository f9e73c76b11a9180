//! Unit rules for the skirmish simulation.
//!
//! `skirmish-core` defines how a unit lives and dies (life, death transition,
//! ownership, construction progress) and how its skills are organised into UI
//! panels. It performs no I/O: assets, skill data and engine flags are reached
//! through the collaborator traits in [`env`] and [`player`].
pub mod env;
pub mod error;
pub mod player;
pub mod race;
pub mod skill;
pub mod state;

pub use env::{
    AssetError, AssetOracle, EngineLink, EntityFlags, EntitySetup, Env, HeadlessLink, IconHandle,
    OracleError, SkillAssignment,
};
pub use error::{ErrorSeverity, GameError};
pub use player::{Player, Players, PopulationTracker};
pub use race::Race;
pub use skill::{
    CatalogSkill, Skill, SkillCatalog, SkillCost, SkillDefinition, SkillError, SkillFactory,
    SkillKind, SkillPanel, SkillRegistry,
};
pub use state::{
    DamageOutcome, Entity, EntityError, EntityId, Lifecycle, PlayerId, ResourceMeter,
};
