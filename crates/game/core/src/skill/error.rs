//! Skill creation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillKind;

/// Errors raised while creating or assigning skills.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    /// The factory has no definition for the requested kind.
    #[error("skill kind '{0}' is not registered with the factory")]
    UnknownKind(SkillKind),
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // The entity is untouched; another kind may still be assigned
            SkillError::UnknownKind(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SkillError::UnknownKind(_) => "SKILL_UNKNOWN_KIND",
        }
    }
}
