//! Encounter lookup and allocation errors.

use super::EntityId;
use crate::character::CombatError;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterError {
    /// No combatant with this id.
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    /// The id refers to a thing where a character is required.
    #[error("entity {0} is not a character")]
    NotACharacter(EntityId),

    /// All ids have been handed out.
    #[error("entity id overflow (current: {current})")]
    EntityIdOverflow { current: u32 },

    /// A combat rule was broken.
    #[error(transparent)]
    Rule(#[from] CombatError),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EntityNotFound(_) | Self::NotACharacter(_) => ErrorSeverity::Validation,
            Self::EntityIdOverflow { .. } => ErrorSeverity::Fatal,
            Self::Rule(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "ENCOUNTER_ENTITY_NOT_FOUND",
            Self::NotACharacter(_) => "ENCOUNTER_NOT_A_CHARACTER",
            Self::EntityIdOverflow { .. } => "ENCOUNTER_ENTITY_ID_OVERFLOW",
            Self::Rule(e) => e.error_code(),
        }
    }
}
