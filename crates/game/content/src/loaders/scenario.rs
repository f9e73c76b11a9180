//! Scenario loader.
//!
//! A scenario lists the players of a match, the units present at start and a
//! scripted sequence of events (damage, ownership changes, skill grants) that
//! a driver replays against the spawned entities.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{EntityId, Player, PlayerId, SkillKind, SkillPanel};

use crate::loaders::{LoadResult, read_file};

/// A unit placed at scenario start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub id: EntityId,
    /// Key into the unit catalog.
    pub unit: String,
    #[serde(default)]
    pub owner: Option<PlayerId>,
    /// Construction progress; buildings still under construction start below 100.
    #[serde(default)]
    pub progress: Option<u32>,
}

/// One scripted step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioEvent {
    Damage {
        target: EntityId,
        amount: u32,
        #[serde(default)]
        attacker: Option<EntityId>,
    },
    Kill {
        target: EntityId,
    },
    SetOwner {
        target: EntityId,
        owner: PlayerId,
    },
    Progress {
        target: EntityId,
        percent: u32,
    },
    Grant {
        target: EntityId,
        panel: SkillPanel,
        kind: SkillKind,
        #[serde(default)]
        priority: i32,
    },
    Revoke {
        target: EntityId,
        panel: SkillPanel,
        kind: SkillKind,
    },
    ShowPanel {
        target: EntityId,
        panel: SkillPanel,
    },
}

impl ScenarioEvent {
    /// Entity the event applies to.
    pub fn target(&self) -> EntityId {
        match self {
            ScenarioEvent::Damage { target, .. }
            | ScenarioEvent::Kill { target }
            | ScenarioEvent::SetOwner { target, .. }
            | ScenarioEvent::Progress { target, .. }
            | ScenarioEvent::Grant { target, .. }
            | ScenarioEvent::Revoke { target, .. }
            | ScenarioEvent::ShowPanel { target, .. } => *target,
        }
    }
}

/// Complete scenario description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub spawns: Vec<SpawnEntry>,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    /// Checks cross references: unique ids, known owners, known targets.
    pub fn validate(&self) -> LoadResult<()> {
        let mut player_ids = HashSet::new();
        for player in &self.players {
            if !player_ids.insert(player.id) {
                anyhow::bail!("Duplicate player id {}", player.id);
            }
        }

        let mut entity_ids = HashSet::new();
        for spawn in &self.spawns {
            if !entity_ids.insert(spawn.id) {
                anyhow::bail!("Duplicate spawn id {}", spawn.id);
            }
            if let Some(owner) = spawn.owner
                && !player_ids.contains(&owner)
            {
                anyhow::bail!("Spawn {} references unknown player {}", spawn.id, owner);
            }
        }

        for (index, event) in self.events.iter().enumerate() {
            if !entity_ids.contains(&event.target()) {
                anyhow::bail!("Event {} targets unknown entity {}", index, event.target());
            }
            if let ScenarioEvent::SetOwner { owner, .. } = event
                && !player_ids.contains(owner)
            {
                anyhow::bail!("Event {} references unknown player {}", index, owner);
            }
        }

        Ok(())
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario.validate()?;

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::Race;

    use super::*;

    const SCENARIO: &str = r#"(
        players: [
            (id: 1, name: "Lothar", race: human),
            (id: 2, name: "Orgrim", race: orc),
        ],
        spawns: [
            (id: 1, unit: "footman", owner: Some(1)),
            (id: 2, unit: "grunt", owner: Some(2)),
            (id: 3, unit: "farm", owner: Some(1), progress: Some(40)),
        ],
        events: [
            Damage(target: 2, amount: 20, attacker: Some(1)),
            Grant(target: 1, panel: 1, kind: cancel, priority: 9),
            Kill(target: 2),
            SetOwner(target: 3, owner: 2),
        ],
    )"#;

    #[test]
    fn parses_scenario() {
        let scenario = ScenarioLoader::parse(SCENARIO).unwrap();
        assert_eq!(scenario.players.len(), 2);
        assert_eq!(scenario.players[1].race, Race::Orc);
        assert_eq!(scenario.players[1].population, 0);
        assert_eq!(scenario.spawns[2].progress, Some(40));
        assert_eq!(scenario.spawns[0].progress, None);
        assert_eq!(
            scenario.events[0],
            ScenarioEvent::Damage {
                target: EntityId(2),
                amount: 20,
                attacker: Some(EntityId(1)),
            }
        );
        assert_eq!(scenario.events[3].target(), EntityId(3));
    }

    #[test]
    fn rejects_unknown_event_target() {
        let err = ScenarioLoader::parse(
            r#"(spawns: [(id: 1, unit: "footman")], events: [Kill(target: 9)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown entity #9"));
    }

    #[test]
    fn rejects_unknown_owner() {
        let err = ScenarioLoader::parse(r#"(spawns: [(id: 1, unit: "footman", owner: Some(4))])"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown player P4"));
    }

    #[test]
    fn rejects_duplicate_spawn_ids() {
        let err = ScenarioLoader::parse(
            r#"(spawns: [(id: 1, unit: "footman"), (id: 1, unit: "grunt")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate spawn id #1"));
    }
}
