//! Rule violations raised by character operations.

use crate::error::{ErrorSeverity, GameError};

/// Preconditions a caller broke.
///
/// Gameplay no-ops (out of range, friendly fire) are not errors; see
/// [`AttackOutcome`](crate::combat::AttackOutcome).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// An entity targeted itself with an attack.
    #[error("a character cannot attack itself")]
    CannotAttackItself,

    /// Heal target is neither the healer nor an ally.
    #[error("only yourself or allies can be healed")]
    CannotHeal,

    /// Heal target has no health left.
    #[error("dead characters cannot be healed")]
    DeadCharacter,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CannotAttackItself => "COMBAT_CANNOT_ATTACK_ITSELF",
            Self::CannotHeal => "COMBAT_CANNOT_HEAL",
            Self::DeadCharacter => "COMBAT_DEAD_CHARACTER",
        }
    }
}
