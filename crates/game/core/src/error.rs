//! Shared error classification.
//!
//! Each failure domain owns its error enum (`EntityError`, `SkillError`,
//! `AssetError`, `OracleError`); this module only defines how callers can
//! triage them without matching on every variant.

/// How a caller should react to a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorSeverity {
    /// The entity is untouched; a different request may succeed.
    ///
    /// Granting a skill kind the factory does not know.
    Recoverable,

    /// Data is malformed and will fail again until it is fixed.
    ///
    /// Non-positive max life, unresolvable icon.
    Invalid,

    /// A collaborator the operation needs was never wired in.
    Fatal,
}

impl ErrorSeverity {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Whether a driver replaying many operations should stop.
    pub const fn should_abort(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Triage information attached to every error in this crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and assertions. Falls back to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_aborts() {
        assert!(ErrorSeverity::Fatal.should_abort());
        assert!(!ErrorSeverity::Invalid.should_abort());
        assert!(!ErrorSeverity::Recoverable.should_abort());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Invalid.is_recoverable());
    }

    #[test]
    fn labels_are_snake_case() {
        assert_eq!(ErrorSeverity::Invalid.as_str(), "invalid");
        assert_eq!(ErrorSeverity::Fatal.to_string(), "fatal");
    }
}
