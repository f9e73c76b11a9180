//! Skill system for entities.
//!
//! A skill is an assignable capability (move, attack, build a farm, train a
//! peasant) bound to one entity and one UI panel. Skills are created by a
//! [`SkillFactory`], owned by exactly one entity, and indexed by panel in a
//! [`SkillRegistry`].
//!
//! # Design
//!
//! - **SkillKind**: Closed identity of a capability; at most one per panel
//! - **Skill**: Open capability interface (`Box<dyn Skill>`)
//! - **SkillPanel**: Non-negative UI page index
mod catalog;
mod error;
mod registry;

use std::fmt;

pub use catalog::{CatalogSkill, SkillCatalog, SkillCost, SkillDefinition, SkillFactory};
pub use error::SkillError;
pub use registry::SkillRegistry;

use crate::state::EntityId;

/// Identity of a skill capability.
///
/// Kinds are what panels are keyed by: a panel holds at most one skill per kind.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    // ========================================================================
    // Unit orders
    // ========================================================================
    Move,
    Stop,
    Attack,
    Patrol,

    // ========================================================================
    // Worker orders
    // ========================================================================
    /// Gather from a gold mine or forest.
    Extract,
    /// Bring carried resources back to the nearest town hall.
    Carry,
    Repair,

    // ========================================================================
    // Construction
    // ========================================================================
    BuildFarm,
    BuildBarracks,
    BuildLumberMill,

    // ========================================================================
    // Production
    // ========================================================================
    ProducePeasant,
    ProducePeon,
    ProduceFootman,
    ProduceGrunt,

    /// Back out of a sub-panel or abort the current order.
    Cancel,
}

/// UI page index for skills (e.g. 0 = orders, 1 = build menu).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillPanel(pub u32);

impl fmt::Display for SkillPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel {}", self.0)
    }
}

/// Capability interface implemented by every skill.
///
/// Lifecycle: the factory creates the skill, the entity sets owner and
/// priority, calls [`Skill::prepare`] once, then hands it to its registry.
pub trait Skill: fmt::Debug {
    /// Capability identity.
    fn kind(&self) -> SkillKind;

    /// Ordering key inside a panel (ascending).
    fn priority(&self) -> i32;

    fn set_priority(&mut self, priority: i32);

    /// Entity this skill belongs to, once assigned.
    fn owner(&self) -> Option<EntityId>;

    fn set_owner(&mut self, owner: EntityId);

    /// One-time initialization run after owner and priority are known.
    fn prepare(&mut self) {}

    /// Display name; defaults to the kind's snake_case name.
    fn name(&self) -> &str {
        self.kind().into()
    }
}
