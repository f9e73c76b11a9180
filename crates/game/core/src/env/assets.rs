use std::fmt;

use crate::error::{ErrorSeverity, GameError};
use crate::race::Race;

/// Resolves icon references to renderable handles.
///
/// Implementations decide what "renderable" means (a texture id, a file path);
/// the core only stores the handle.
pub trait AssetOracle: Send + Sync {
    /// Resolves `icon` inside the asset directory of `race`.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::NotFound` if the asset does not exist.
    fn resolve_icon(&self, race: Race, icon: &str) -> Result<IconHandle, AssetError>;
}

/// Opaque handle to a loaded icon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconHandle {
    id: u32,
    source: String,
}

impl IconHandle {
    pub fn new(id: u32, source: impl Into<String>) -> Self {
        Self {
            id,
            source: source.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Where the icon was resolved from (path or key).
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "icon#{} ({})", self.id, self.source)
    }
}

/// Errors raised while resolving assets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("icon '{icon}' not found for race {race}")]
    NotFound { race: Race, icon: String },

    /// The icon name is not a plain file name (separators, `..`, absolute paths).
    #[error("icon name '{icon}' is not a plain file name")]
    InvalidName { icon: String },

    #[error("no icon handle ids left")]
    HandlesExhausted,
}

impl GameError for AssetError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            AssetError::NotFound { .. } | AssetError::InvalidName { .. } => ErrorSeverity::Invalid,
            AssetError::HandlesExhausted => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AssetError::NotFound { .. } => "ASSET_NOT_FOUND",
            AssetError::InvalidName { .. } => "ASSET_INVALID_NAME",
            AssetError::HandlesExhausted => "ASSET_HANDLES_EXHAUSTED",
        }
    }
}
