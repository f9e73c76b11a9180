use crate::race::Race;
use crate::skill::{SkillKind, SkillPanel};

/// Attributes read from configuration to build one entity.
///
/// Numeric fields are kept as read (signed) so that invalid configuration is
/// rejected by [`Entity::new`](crate::state::Entity::new) with a proper error
/// instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySetup {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub race: Race,
    pub max_life: i32,
    pub fov: i32,
    /// Icon file name inside the race asset directory.
    pub icon: String,
    /// Skills granted at construction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillAssignment>,
}

impl EntitySetup {
    pub fn new(
        name: impl Into<String>,
        race: Race,
        max_life: i32,
        fov: i32,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            race,
            max_life,
            fov,
            icon: icon.into(),
            skills: Vec::new(),
        }
    }

    pub fn with_skill(mut self, panel: SkillPanel, kind: SkillKind, priority: i32) -> Self {
        self.skills.push(SkillAssignment {
            panel,
            kind,
            priority,
        });
        self
    }
}

/// One skill granted to an entity: which panel, which kind, which slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillAssignment {
    pub panel: SkillPanel,
    pub kind: SkillKind,
    pub priority: i32,
}
