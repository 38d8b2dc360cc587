//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`CombatError`, `EncounterError`) live next to the
//! operations that raise them. This module holds the shared severity
//! classification and the trait they all implement.
//!
//! Only programmer errors are surfaced as errors. Gameplay-invalid requests
//! (out-of-range attacks, friendly fire, overhealing) are silent no-ops or
//! clamps and never reach this module.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid request that should not be retried without changes.
    ///
    /// Examples: attacking yourself, healing a dead character, unknown entity id
    Validation,

    /// Unrecoverable error; the encounter cannot accept further entities.
    ///
    /// Examples: entity id space exhausted
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; useful for metrics and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
