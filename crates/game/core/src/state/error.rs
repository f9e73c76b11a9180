//! Entity construction errors.

use crate::env::{AssetError, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillError;

/// Errors that prevent an entity from being built.
///
/// Construction is all-or-nothing: when one of these is returned, no entity exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// A configured attribute is missing or out of range.
    #[error("invalid entity configuration '{field}': {reason}")]
    Configuration {
        /// Attribute name as it appears in configuration.
        field: &'static str,
        reason: String,
    },

    /// The icon could not be resolved.
    #[error(transparent)]
    MissingAsset(#[from] AssetError),

    /// A skill granted at construction could not be created.
    #[error(transparent)]
    Skill(#[from] SkillError),

    /// A required oracle was not wired into the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl EntityError {
    pub(crate) fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        EntityError::Configuration {
            field,
            reason: reason.into(),
        }
    }
}

impl GameError for EntityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EntityError::Configuration { .. } => ErrorSeverity::Invalid,
            EntityError::MissingAsset(err) => err.severity(),
            EntityError::Skill(err) => err.severity(),
            EntityError::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EntityError::Configuration { .. } => "ENTITY_CONFIGURATION",
            EntityError::MissingAsset(err) => err.error_code(),
            EntityError::Skill(err) => err.error_code(),
            EntityError::Oracle(err) => err.error_code(),
        }
    }
}
