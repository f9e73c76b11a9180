//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required oracle is missing from the [`Env`](super::Env).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// AssetOracle is not available in the environment.
    #[error("AssetOracle not available")]
    AssetsNotAvailable,

    /// SkillFactory is not available in the environment.
    #[error("SkillFactory not available")]
    SkillsNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Missing oracles are fatal - nothing can be spawned without them
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::AssetsNotAvailable => "ORACLE_ASSETS_NOT_AVAILABLE",
            OracleError::SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
        }
    }
}
