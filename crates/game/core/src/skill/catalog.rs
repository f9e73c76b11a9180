//! Data-driven skill definitions and the factory built from them.
//!
//! Definitions are plain data (usually loaded from `skills.ron` by the content
//! crate). The [`SkillCatalog`] turns them into [`CatalogSkill`] instances on
//! request, which is the only way skills enter an entity.

use std::collections::HashMap;

use super::{Skill, SkillError, SkillKind};
use crate::state::EntityId;

/// Produces skill instances by kind.
pub trait SkillFactory: Send + Sync {
    /// Creates a fresh, unowned skill of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::UnknownKind` if the kind is not registered.
    fn create(&self, kind: SkillKind) -> Result<Box<dyn Skill>, SkillError>;
}

/// Resource cost paid when a construction/production skill is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCost {
    pub gold: u32,
    pub wood: u32,
}

impl SkillCost {
    pub const FREE: Self = Self { gold: 0, wood: 0 };

    pub fn new(gold: u32, wood: u32) -> Self {
        Self { gold, wood }
    }

    pub fn is_free(&self) -> bool {
        *self == Self::FREE
    }
}

/// Static description of a skill kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub kind: SkillKind,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Icon file name, resolved by the frontend.
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: SkillCost,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hotkey: Option<char>,
}

impl SkillDefinition {
    pub fn new(kind: SkillKind, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: String::new(),
            icon: icon.into(),
            cost: SkillCost::FREE,
            hotkey: None,
        }
    }

    pub fn with_cost(mut self, cost: SkillCost) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey);
        self
    }
}

/// Skill instance backed by a [`SkillDefinition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSkill {
    definition: SkillDefinition,
    owner: Option<EntityId>,
    priority: i32,
    tooltip: Option<String>,
}

impl CatalogSkill {
    pub fn new(definition: SkillDefinition) -> Self {
        Self {
            definition,
            owner: None,
            priority: 0,
            tooltip: None,
        }
    }

    pub fn definition(&self) -> &SkillDefinition {
        &self.definition
    }

    /// Tooltip text, available once the skill has been prepared.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_prepared(&self) -> bool {
        self.tooltip.is_some()
    }
}

impl Skill for CatalogSkill {
    fn kind(&self) -> SkillKind {
        self.definition.kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: EntityId) {
        self.owner = Some(owner);
    }

    fn prepare(&mut self) {
        if self.tooltip.is_some() {
            return;
        }

        let def = &self.definition;
        let mut tooltip = match def.hotkey {
            Some(key) => format!("{} [{}]", def.name, key.to_ascii_uppercase()),
            None => def.name.clone(),
        };
        if !def.cost.is_free() {
            tooltip.push_str(&format!(" ({} gold, {} wood)", def.cost.gold, def.cost.wood));
        }
        self.tooltip = Some(tooltip);
    }

    fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Registry of skill definitions, usable as a [`SkillFactory`].
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    definitions: HashMap<SkillKind, SkillDefinition>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, returning the one it replaced.
    pub fn register(&mut self, definition: SkillDefinition) -> Option<SkillDefinition> {
        self.definitions.insert(definition.kind, definition)
    }

    pub fn get(&self, kind: SkillKind) -> Option<&SkillDefinition> {
        self.definitions.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered kinds in declaration order.
    pub fn kinds(&self) -> Vec<SkillKind> {
        let mut kinds: Vec<_> = self.definitions.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

impl FromIterator<SkillDefinition> for SkillCatalog {
    fn from_iter<T: IntoIterator<Item = SkillDefinition>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.register(definition);
        }
        catalog
    }
}

impl SkillFactory for SkillCatalog {
    fn create(&self, kind: SkillKind) -> Result<Box<dyn Skill>, SkillError> {
        let definition = self.get(kind).ok_or(SkillError::UnknownKind(kind))?;
        Ok(Box::new(CatalogSkill::new(definition.clone())))
    }
}
