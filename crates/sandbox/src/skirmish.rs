//! Scenario replay over live entities.
use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use skirmish_content::{Scenario, ScenarioEvent, UnitCatalog};
use skirmish_core::{
    DamageOutcome, Entity, EntityId, Env, GameError, HeadlessLink, Players, PopulationTracker,
    SkillFactory,
};

/// Players plus every entity spawned for a scenario.
///
/// Population is kept in step with ownership here: spawning an owned unit and
/// transferring a living unit both adjust the players involved, while deaths
/// are reported by the entities themselves.
#[derive(Debug)]
pub struct Skirmish {
    players: Players,
    entities: BTreeMap<EntityId, Entity>,
}

impl Skirmish {
    /// Spawns the scenario's starting units.
    pub fn setup(scenario: &Scenario, units: &UnitCatalog, env: &Env<'_>) -> Result<Self> {
        let mut players: Players = scenario.players.iter().cloned().collect();
        let mut entities = BTreeMap::new();

        for spawn in &scenario.spawns {
            let setup = units
                .get(&spawn.unit)
                .ok_or_else(|| anyhow!("Unknown unit '{}' for entity {}", spawn.unit, spawn.id))?;

            let mut entity = Entity::spawn(spawn.id, setup, env, Box::new(HeadlessLink::new()))
                .with_context(|| {
                    format!("Failed to spawn '{}' as entity {}", spawn.unit, spawn.id)
                })?;

            if let Some(owner) = spawn.owner {
                let player = players
                    .get(owner)
                    .ok_or_else(|| anyhow!("Unknown owner {} for entity {}", owner, spawn.id))?;
                entity.set_owner(player);
                players.change_population(owner, 1);
            }
            if let Some(progress) = spawn.progress {
                entity.set_progress_percent(progress);
            }

            tracing::debug!(
                entity = %spawn.id,
                unit = %spawn.unit,
                owner = ?spawn.owner,
                "spawned"
            );
            entities.insert(spawn.id, entity);
        }

        tracing::info!(
            players = players.len(),
            entities = entities.len(),
            "scenario ready"
        );

        Ok(Self { players, entities })
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Replays `events` in order.
    pub fn run(&mut self, events: &[ScenarioEvent], skills: &dyn SkillFactory) -> Result<()> {
        for (step, event) in events.iter().enumerate() {
            self.apply(event, skills)
                .with_context(|| format!("Scenario step {step} failed"))?;
        }
        Ok(())
    }

    /// Applies a single event.
    ///
    /// Damage and kills always reach the entity so repeated hits on a corpse
    /// are observable. Every other order on a dead entity is skipped. The
    /// attacker of a damage event is marked as busy until it dies.
    pub fn apply(&mut self, event: &ScenarioEvent, skills: &dyn SkillFactory) -> Result<()> {
        if let ScenarioEvent::Damage {
            attacker: Some(attacker),
            ..
        } = event
        {
            let source = self
                .entities
                .get_mut(attacker)
                .ok_or_else(|| anyhow!("Unknown attacker entity {attacker}"))?;
            source.begin_order();
        }

        let target = event.target();
        let entity = self
            .entities
            .get_mut(&target)
            .ok_or_else(|| anyhow!("Unknown target entity {target}"))?;

        match event {
            ScenarioEvent::Damage {
                amount, attacker, ..
            } => {
                let outcome = entity.apply_damage(*amount, *attacker, &mut self.players);
                log_outcome(target, outcome);
                return Ok(());
            }
            ScenarioEvent::Kill { .. } => {
                let outcome = entity.kill(&mut self.players);
                log_outcome(target, outcome);
                return Ok(());
            }
            _ => {}
        }

        if entity.is_dead() {
            tracing::debug!(entity = %target, ?event, "ignoring order for dead entity");
            return Ok(());
        }

        match event {
            ScenarioEvent::SetOwner { owner, .. } => {
                let player = self
                    .players
                    .get(*owner)
                    .ok_or_else(|| anyhow!("Unknown owner {owner}"))?;
                let previous = entity.owner();
                entity.set_owner(player);

                if previous != Some(*owner) {
                    if let Some(previous) = previous {
                        self.players.change_population(previous, -1);
                    }
                    self.players.change_population(*owner, 1);
                }
                tracing::info!(
                    entity = %target,
                    from = ?previous,
                    to = %owner,
                    "ownership changed"
                );
            }
            ScenarioEvent::Progress { percent, .. } => {
                if *percent > 100 {
                    tracing::warn!(entity = %target, percent, "progress above 100%");
                }
                entity.set_progress_percent(*percent);
            }
            ScenarioEvent::Grant {
                panel,
                kind,
                priority,
                ..
            } => match entity.add_skill(*panel, *kind, *priority, skills) {
                Ok(Some(replaced)) => {
                    tracing::debug!(
                        entity = %target,
                        %panel,
                        %kind,
                        replaced_priority = replaced.priority(),
                        "skill replaced"
                    );
                }
                Ok(None) => {
                    tracing::debug!(entity = %target, %panel, %kind, "skill granted");
                }
                Err(e) if e.severity().should_abort() => {
                    return Err(anyhow!("Skill grant on {target} failed: {e}"));
                }
                Err(e) => {
                    tracing::warn!(
                        entity = %target,
                        %panel,
                        %kind,
                        code = e.error_code(),
                        severity = %e.severity(),
                        "skill grant rejected"
                    );
                }
            },
            ScenarioEvent::Revoke { panel, kind, .. } => {
                if entity.remove_skill(*panel, *kind).is_none() {
                    tracing::debug!(entity = %target, %panel, %kind, "nothing to revoke");
                }
            }
            ScenarioEvent::ShowPanel { panel, .. } => {
                entity.set_skill_panel(*panel);
                let shown: Vec<&str> = entity.skills_in(*panel).map(|s| s.name()).collect();
                tracing::info!(entity = %target, %panel, skills = ?shown, "panel shown");
            }
            ScenarioEvent::Damage { .. } | ScenarioEvent::Kill { .. } => {}
        }

        Ok(())
    }

    /// Logs the final state of every player and entity.
    pub fn report(&self) {
        for player in self.players.iter() {
            tracing::info!(
                player = %player.id,
                name = %player.name,
                race = %player.race,
                population = player.population,
                "player summary"
            );
        }
        for entity in self.entities.values() {
            tracing::info!(
                entity = %entity.id(),
                name = entity.name(),
                life = entity.life(),
                life_percent = entity.life_percent(),
                dead = entity.is_dead(),
                owner = ?entity.owner(),
                progress = entity.progress_percent(),
                skills = entity.skills().len(),
                flags = ?entity.link().flags(),
                "entity summary"
            );
        }
    }
}

fn log_outcome(target: EntityId, outcome: DamageOutcome) {
    match outcome {
        DamageOutcome::Damaged { dealt, remaining } => {
            tracing::info!(entity = %target, dealt, remaining, "damaged");
        }
        DamageOutcome::Killed { dealt } => {
            tracing::info!(entity = %target, dealt, "killed");
        }
        DamageOutcome::AlreadyDead => {
            tracing::debug!(entity = %target, "damage ignored, already dead");
        }
    }
}
