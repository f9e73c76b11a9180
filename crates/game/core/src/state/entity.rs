//! Entity lifecycle: life, death, ownership, construction progress, skills.

use super::{EntityError, EntityId, PlayerId, ResourceMeter};
use crate::env::{AssetOracle, EngineLink, EntitySetup, Env, IconHandle};
use crate::player::{Player, PopulationTracker};
use crate::race::Race;
use crate::skill::{Skill, SkillError, SkillFactory, SkillKind, SkillPanel, SkillRegistry};

/// Alive/dead state of an entity. Only moves from `Alive` to `Dead`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Alive,
    Dead {
        killed_by: Option<EntityId>,
    },
}

/// Result of [`Entity::apply_damage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Life decreased and the entity survived.
    Damaged { dealt: u32, remaining: u32 },
    /// This hit emptied life and ran the death transition.
    Killed { dealt: u32 },
    /// The entity was already dead; nothing happened.
    AlreadyDead,
}

/// A controllable unit or building.
///
/// # Invariants
///
/// - `life.current <= life.maximum`, `life.maximum > 0`
/// - `lifecycle` is `Dead` iff life reached zero through [`Entity::apply_damage`]
/// - The death transition runs at most once
///
/// Nothing is locked after death: callers check [`Entity::is_dead`] before
/// issuing orders.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    name: String,
    race: Race,
    fov: u32,
    icon: IconHandle,
    life: ResourceMeter,
    lifecycle: Lifecycle,
    owner: Option<PlayerId>,
    /// Construction progress in percent, written by the builder.
    progress: u32,
    skills: SkillRegistry,
    link: Box<dyn EngineLink>,
}

impl Entity {
    /// Builds an entity at full life from its configured attributes.
    ///
    /// Skills listed in `setup` are ignored here; use [`Entity::spawn`] to
    /// grant them as well.
    ///
    /// # Errors
    ///
    /// - `EntityError::Configuration` for non-positive life, negative fov or an empty name/icon
    /// - `EntityError::MissingAsset` if the icon cannot be resolved
    pub fn new(
        id: EntityId,
        setup: &EntitySetup,
        assets: &dyn AssetOracle,
        link: Box<dyn EngineLink>,
    ) -> Result<Self, EntityError> {
        let max_life = u32::try_from(setup.max_life)
            .ok()
            .filter(|life| *life > 0)
            .ok_or_else(|| {
                EntityError::configuration(
                    "max_life",
                    format!("must be positive, got {}", setup.max_life),
                )
            })?;
        let fov = u32::try_from(setup.fov).map_err(|_| {
            EntityError::configuration("fov", format!("must not be negative, got {}", setup.fov))
        })?;
        if setup.name.trim().is_empty() {
            return Err(EntityError::configuration("name", "must not be empty"));
        }
        if setup.icon.trim().is_empty() {
            return Err(EntityError::configuration("icon", "must not be empty"));
        }

        let icon = assets.resolve_icon(setup.race, &setup.icon)?;

        Ok(Self {
            id,
            name: setup.name.clone(),
            race: setup.race,
            fov,
            icon,
            life: ResourceMeter::full(max_life),
            lifecycle: Lifecycle::Alive,
            owner: None,
            progress: 100,
            skills: SkillRegistry::new(),
            link,
        })
    }

    /// Builds an entity and grants every skill listed in `setup`.
    ///
    /// Construction is all-or-nothing: if any skill kind is unknown, no entity
    /// is returned.
    pub fn spawn(
        id: EntityId,
        setup: &EntitySetup,
        env: &Env<'_>,
        link: Box<dyn EngineLink>,
    ) -> Result<Self, EntityError> {
        let mut entity = Self::new(id, setup, env.assets()?, link)?;

        if !setup.skills.is_empty() {
            let factory = env.skills()?;
            for assignment in &setup.skills {
                entity.add_skill(
                    assignment.panel,
                    assignment.kind,
                    assignment.priority,
                    factory,
                )?;
            }
        }

        tracing::debug!(
            entity = %id,
            name = %entity.name,
            skills = entity.skills.len(),
            "spawned entity"
        );
        Ok(entity)
    }

    // ========================================================================
    // Identity
    // ========================================================================

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Race {
        self.race
    }

    /// Field-of-view radius in tiles.
    pub fn fov(&self) -> u32 {
        self.fov
    }

    pub fn icon(&self) -> &IconHandle {
        &self.icon
    }

    pub fn link(&self) -> &dyn EngineLink {
        self.link.as_ref()
    }

    // ========================================================================
    // Life & death
    // ========================================================================

    pub fn life(&self) -> u32 {
        self.life.current
    }

    pub fn max_life(&self) -> u32 {
        self.life.maximum
    }

    /// Life in percent for health bars, rounded half up.
    pub fn life_percent(&self) -> u32 {
        self.life.percent()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Dead { .. })
    }

    /// Attacker credited with the kill, if the entity died to an attack.
    pub fn killed_by(&self) -> Option<EntityId> {
        match self.lifecycle {
            Lifecycle::Dead { killed_by } => killed_by,
            Lifecycle::Alive => None,
        }
    }

    /// Removes `amount` life, floored at zero.
    ///
    /// When life reaches zero on a living entity the death transition runs:
    /// the entity is marked dead, the engine link is made unselectable,
    /// inactive and not alive, its order is stopped, it leaves spatial
    /// tracking, and the owner (if any) loses one population.
    pub fn apply_damage(
        &mut self,
        amount: u32,
        attacker: Option<EntityId>,
        population: &mut dyn PopulationTracker,
    ) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::AlreadyDead;
        }

        let dealt = self.life.decrease(amount);
        if self.life.is_empty() {
            self.die(attacker, population);
            return DamageOutcome::Killed { dealt };
        }

        DamageOutcome::Damaged {
            dealt,
            remaining: self.life.current,
        }
    }

    /// Forwards a new order to the engine. Dead entities take no orders.
    pub fn begin_order(&mut self) {
        if !self.is_dead() {
            self.link.begin_order();
        }
    }

    /// Applies damage equal to the remaining life.
    pub fn kill(&mut self, population: &mut dyn PopulationTracker) -> DamageOutcome {
        self.apply_damage(self.life.current, None, population)
    }

    fn die(&mut self, attacker: Option<EntityId>, population: &mut dyn PopulationTracker) {
        self.lifecycle = Lifecycle::Dead { killed_by: attacker };

        self.link.set_selectable(false);
        self.link.set_active(false);
        self.link.set_alive(false);
        self.link.stop();
        self.link.remove_ref();

        if let Some(owner) = self.owner {
            population.change_population(owner, -1);
        }

        tracing::info!(
            entity = %self.id,
            name = %self.name,
            owner = ?self.owner,
            killed_by = ?attacker,
            "entity died"
        );
    }

    // ========================================================================
    // Ownership & construction
    // ========================================================================

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Assigns the owning player and forwards its id to the engine.
    ///
    /// The previous owner is not notified; transfer bookkeeping belongs to the caller.
    pub fn set_owner(&mut self, player: &Player) {
        self.owner = Some(player.id);
        self.link.set_player_id(player.id);
    }

    pub fn progress_percent(&self) -> u32 {
        self.progress
    }

    /// Sets construction progress. Not clamped; callers pass 0..=100.
    pub fn set_progress_percent(&mut self, progress: u32) {
        self.progress = progress;
    }

    // ========================================================================
    // Skills
    // ========================================================================

    /// Creates a skill of `kind` and assigns it to `panel`.
    ///
    /// The new skill is owned by this entity, given `priority`, and prepared
    /// before insertion. Returns the skill it replaced, if any.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::UnknownKind` if `factory` cannot build `kind`; the
    /// entity is left unchanged.
    pub fn add_skill(
        &mut self,
        panel: SkillPanel,
        kind: SkillKind,
        priority: i32,
        factory: &dyn SkillFactory,
    ) -> Result<Option<Box<dyn Skill>>, SkillError> {
        let mut skill = factory.create(kind)?;
        skill.set_owner(self.id);
        skill.set_priority(priority);
        skill.prepare();
        Ok(self.insert_skill(skill, panel))
    }

    /// Inserts an already built skill into `panel`.
    pub fn insert_skill(
        &mut self,
        skill: Box<dyn Skill>,
        panel: SkillPanel,
    ) -> Option<Box<dyn Skill>> {
        self.skills.add_skill(skill, panel)
    }

    pub fn skill(&self, panel: SkillPanel, kind: SkillKind) -> Option<&dyn Skill> {
        self.skills.get_skill(panel, kind)
    }

    pub fn remove_skill(&mut self, panel: SkillPanel, kind: SkillKind) -> Option<Box<dyn Skill>> {
        self.skills.remove_skill(panel, kind)
    }

    pub fn skills_in(&self, panel: SkillPanel) -> impl Iterator<Item = &dyn Skill> {
        self.skills.get_skills(panel)
    }

    pub fn all_skills(&self) -> impl Iterator<Item = &dyn Skill> {
        self.skills.all_skills()
    }

    pub fn set_skill_panel(&mut self, panel: SkillPanel) {
        self.skills.set_skill_panel(panel);
    }

    pub fn set_skill_panel_next(&mut self, panel: SkillPanel) {
        self.skills.set_skill_panel_next(panel);
    }

    pub fn skill_panel(&self) -> SkillPanel {
        self.skills.skill_panel()
    }

    pub fn skills(&self) -> &SkillRegistry {
        &self.skills
    }

    pub fn skills_mut(&mut self) -> &mut SkillRegistry {
        &mut self.skills
    }
}
