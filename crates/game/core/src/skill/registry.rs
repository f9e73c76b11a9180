//! Panel-indexed skill table.
//!
//! Skills are grouped by [`SkillPanel`]. Inside a panel they are kept sorted by
//! `(priority, insertion sequence)` so iteration order never depends on hashing
//! or on the order callers happened to query in.
//!
//! # Invariants
//!
//! - A panel holds at most one skill per [`SkillKind`]
//! - Every panel vector is sorted by `(priority, seq)` ascending
//! - Panels with no skills are not stored

use std::collections::BTreeMap;

use super::{Skill, SkillKind, SkillPanel};

#[derive(Debug)]
struct SkillSlot {
    /// Insertion sequence, breaks priority ties.
    seq: u64,
    skill: Box<dyn Skill>,
}

impl SkillSlot {
    fn order_key(&self) -> (i32, u64) {
        (self.skill.priority(), self.seq)
    }
}

/// Skills owned by one entity, indexed by panel, plus the UI paging cursor.
#[derive(Debug, Default)]
pub struct SkillRegistry {
    panels: BTreeMap<SkillPanel, Vec<SkillSlot>>,
    next_seq: u64,
    current_panel: SkillPanel,
    next_panel: SkillPanel,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `skill` into `panel`.
    ///
    /// A skill of the same kind already in that panel is replaced (last write
    /// wins) and returned.
    pub fn add_skill(
        &mut self,
        skill: Box<dyn Skill>,
        panel: SkillPanel,
    ) -> Option<Box<dyn Skill>> {
        let kind = skill.kind();
        let slots = self.panels.entry(panel).or_default();

        let replaced = slots
            .iter()
            .position(|slot| slot.skill.kind() == kind)
            .map(|index| slots.remove(index).skill);

        let slot = SkillSlot {
            seq: self.next_seq,
            skill,
        };
        self.next_seq += 1;
        Self::insert_sorted(slots, slot);

        if replaced.is_some() {
            tracing::debug!(%kind, %panel, "replaced skill");
        } else {
            tracing::debug!(%kind, %panel, "added skill");
        }
        replaced
    }

    /// Returns the skill of `kind` in `panel`, if any.
    pub fn get_skill(&self, panel: SkillPanel, kind: SkillKind) -> Option<&dyn Skill> {
        self.panels
            .get(&panel)?
            .iter()
            .find(|slot| slot.skill.kind() == kind)
            .map(|slot| slot.skill.as_ref())
    }

    /// Removes and returns the skill of `kind` in `panel`. Absent skills are a no-op.
    pub fn remove_skill(&mut self, panel: SkillPanel, kind: SkillKind) -> Option<Box<dyn Skill>> {
        let slots = self.panels.get_mut(&panel)?;
        let index = slots.iter().position(|slot| slot.skill.kind() == kind)?;
        let removed = slots.remove(index).skill;
        if slots.is_empty() {
            self.panels.remove(&panel);
        }

        tracing::debug!(%kind, %panel, "removed skill");
        Some(removed)
    }

    /// Skills of one panel in ascending priority, ties in insertion order.
    pub fn get_skills(&self, panel: SkillPanel) -> impl Iterator<Item = &dyn Skill> {
        self.panels
            .get(&panel)
            .into_iter()
            .flatten()
            .map(|slot| slot.skill.as_ref())
    }

    /// Every skill, grouped by panel ascending, then by priority.
    pub fn all_skills(&self) -> impl Iterator<Item = &dyn Skill> {
        self.panels
            .values()
            .flatten()
            .map(|slot| slot.skill.as_ref())
    }

    /// Changes the priority of a stored skill and restores the panel ordering.
    ///
    /// The skill keeps its original insertion sequence. Returns false if no
    /// such skill exists.
    pub fn set_priority(&mut self, panel: SkillPanel, kind: SkillKind, priority: i32) -> bool {
        let Some(slots) = self.panels.get_mut(&panel) else {
            return false;
        };
        let Some(index) = slots.iter().position(|slot| slot.skill.kind() == kind) else {
            return false;
        };

        let mut slot = slots.remove(index);
        slot.skill.set_priority(priority);
        Self::insert_sorted(slots, slot);
        true
    }

    /// Populated panels in ascending order.
    pub fn panels(&self) -> impl Iterator<Item = SkillPanel> {
        self.panels.keys().copied()
    }

    pub fn panel_len(&self, panel: SkillPanel) -> usize {
        self.panels.get(&panel).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.panels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    // ========================================================================
    // Paging cursor
    // ========================================================================

    pub fn set_skill_panel(&mut self, panel: SkillPanel) {
        self.current_panel = panel;
    }

    pub fn set_skill_panel_next(&mut self, panel: SkillPanel) {
        self.next_panel = panel;
    }

    pub fn skill_panel(&self) -> SkillPanel {
        self.current_panel
    }

    pub fn skill_panel_next(&self) -> SkillPanel {
        self.next_panel
    }

    /// Moves the cursor to the pending next panel.
    pub fn advance_panel(&mut self) {
        self.current_panel = self.next_panel;
    }

    fn insert_sorted(slots: &mut Vec<SkillSlot>, slot: SkillSlot) {
        let key = slot.order_key();
        let at = slots.partition_point(|existing| existing.order_key() <= key);
        slots.insert(at, slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    #[derive(Debug)]
    struct TestSkill {
        kind: SkillKind,
        priority: i32,
        tag: &'static str,
    }

    impl Skill for TestSkill {
        fn kind(&self) -> SkillKind {
            self.kind
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn set_priority(&mut self, priority: i32) {
            self.priority = priority;
        }

        fn owner(&self) -> Option<EntityId> {
            None
        }

        fn set_owner(&mut self, _owner: EntityId) {}

        fn name(&self) -> &str {
            self.tag
        }
    }

    fn skill(kind: SkillKind, priority: i32, tag: &'static str) -> Box<dyn Skill> {
        Box::new(TestSkill {
            kind,
            priority,
            tag,
        })
    }

    fn names<'a>(skills: impl Iterator<Item = &'a dyn Skill>) -> Vec<&'a str> {
        skills.map(|s| s.name()).collect()
    }

    #[test]
    fn get_after_add_and_remove() {
        let mut registry = SkillRegistry::new();
        let panel = SkillPanel(1);

        assert!(registry.add_skill(skill(SkillKind::Attack, 0, "attack"), panel).is_none());
        let found = registry.get_skill(panel, SkillKind::Attack).unwrap();
        assert_eq!(found.name(), "attack");

        let removed = registry.remove_skill(panel, SkillKind::Attack).unwrap();
        assert_eq!(removed.kind(), SkillKind::Attack);
        assert!(registry.get_skill(panel, SkillKind::Attack).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_is_scoped_to_panel() {
        let mut registry = SkillRegistry::new();
        registry.add_skill(skill(SkillKind::Move, 0, "move"), SkillPanel(0));

        assert!(registry.get_skill(SkillPanel(1), SkillKind::Move).is_none());
        assert!(registry.get_skill(SkillPanel(99), SkillKind::Stop).is_none());
        assert_eq!(registry.get_skills(SkillPanel(99)).count(), 0);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut registry = SkillRegistry::new();
        registry.add_skill(skill(SkillKind::Move, 0, "move"), SkillPanel(0));

        assert!(registry.remove_skill(SkillPanel(0), SkillKind::Stop).is_none());
        assert!(registry.remove_skill(SkillPanel(3), SkillKind::Move).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn panel_iterates_by_priority() {
        let mut registry = SkillRegistry::new();
        let panel = SkillPanel(0);
        registry.add_skill(skill(SkillKind::Move, 3, "three"), panel);
        registry.add_skill(skill(SkillKind::Stop, 1, "one"), panel);
        registry.add_skill(skill(SkillKind::Attack, 2, "two"), panel);

        let priorities: Vec<_> = registry.get_skills(panel).map(|s| s.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }

    #[test]
    fn priority_ties_keep_insertion_order() {
        let mut registry = SkillRegistry::new();
        let panel = SkillPanel(0);
        registry.add_skill(skill(SkillKind::Patrol, 5, "first"), panel);
        registry.add_skill(skill(SkillKind::Move, 1, "low"), panel);
        registry.add_skill(skill(SkillKind::Stop, 5, "second"), panel);
        registry.add_skill(skill(SkillKind::Attack, 5, "third"), panel);

        assert_eq!(
            names(registry.get_skills(panel)),
            vec!["low", "first", "second", "third"]
        );
    }

    #[test]
    fn duplicate_kind_replaces_last_wins() {
        let mut registry = SkillRegistry::new();
        let panel = SkillPanel(0);
        registry.add_skill(skill(SkillKind::Move, 1, "old"), panel);
        registry.add_skill(skill(SkillKind::Stop, 2, "stop"), panel);

        let replaced = registry
            .add_skill(skill(SkillKind::Move, 3, "new"), panel)
            .unwrap();
        assert_eq!(replaced.name(), "old");
        assert_eq!(registry.panel_len(panel), 2);
        assert_eq!(names(registry.get_skills(panel)), vec!["stop", "new"]);
    }

    #[test]
    fn same_kind_may_live_in_several_panels() {
        let mut registry = SkillRegistry::new();
        registry.add_skill(skill(SkillKind::Cancel, 9, "cancel-0"), SkillPanel(0));
        registry.add_skill(skill(SkillKind::Cancel, 9, "cancel-1"), SkillPanel(1));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get_skill(SkillPanel(1), SkillKind::Cancel).unwrap().name(),
            "cancel-1"
        );
    }

    #[test]
    fn all_skills_is_concatenation_of_panels() {
        let mut registry = SkillRegistry::new();
        registry.add_skill(skill(SkillKind::BuildFarm, 2, "farm"), SkillPanel(2));
        registry.add_skill(skill(SkillKind::Move, 2, "move"), SkillPanel(0));
        registry.add_skill(skill(SkillKind::BuildBarracks, 1, "barracks"), SkillPanel(2));
        registry.add_skill(skill(SkillKind::Stop, 1, "stop"), SkillPanel(0));
        registry.add_skill(skill(SkillKind::Cancel, 0, "cancel"), SkillPanel(1));

        let expected: Vec<&str> = registry
            .panels()
            .flat_map(|panel| names(registry.get_skills(panel)))
            .collect();
        assert_eq!(names(registry.all_skills()), expected);
        assert_eq!(
            expected,
            vec!["stop", "move", "cancel", "barracks", "farm"]
        );
    }

    #[test]
    fn set_priority_reorders_panel() {
        let mut registry = SkillRegistry::new();
        let panel = SkillPanel(0);
        registry.add_skill(skill(SkillKind::Move, 1, "move"), panel);
        registry.add_skill(skill(SkillKind::Stop, 2, "stop"), panel);

        assert!(registry.set_priority(panel, SkillKind::Move, 10));
        assert_eq!(names(registry.get_skills(panel)), vec!["stop", "move"]);
        assert!(!registry.set_priority(panel, SkillKind::Attack, 0));
        assert!(!registry.set_priority(SkillPanel(5), SkillKind::Move, 0));
    }

    #[test]
    fn cursor_is_unvalidated_state() {
        let mut registry = SkillRegistry::new();
        assert_eq!(registry.skill_panel(), SkillPanel(0));

        registry.set_skill_panel(SkillPanel(4));
        registry.set_skill_panel_next(SkillPanel(7));
        assert_eq!(registry.skill_panel(), SkillPanel(4));
        assert_eq!(registry.skill_panel_next(), SkillPanel(7));
        assert_eq!(registry.get_skills(registry.skill_panel()).count(), 0);

        registry.advance_panel();
        assert_eq!(registry.skill_panel(), SkillPanel(7));
    }
}
