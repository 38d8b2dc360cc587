//! Actions as values.
//!
//! Each action names its actor and target by [`EntityId`] and runs against an
//! [`Encounter`] through [`ActionTransition`]. Actions are plain data
//! (serializable with the `serde` feature), so a fight can be recorded and
//! replayed.
//!
//! - `combat`: `AttackAction`, `HealAction`
//! - `progression`: `LevelUpAction`, `JoinFactionAction`, `LeaveFactionAction`

pub mod combat;
pub mod progression;

pub use combat::{AttackAction, HealAction};
pub use progression::{JoinFactionAction, LeaveFactionAction, LevelUpAction};

use crate::encounter::{Encounter, EntityId};

/// Defines how a concrete action mutates an encounter.
///
/// [`Encounter::execute`] runs `pre_validate`, `apply`, then `post_validate`.
/// The validation hooks only read the encounter.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the encounter **before** mutation.
    fn pre_validate(&self, _encounter: &Encounter) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the encounter.
    fn apply(&self, encounter: &mut Encounter) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the encounter **after** mutation.
    fn post_validate(&self, _encounter: &Encounter) -> Result<(), Self::Error> {
        Ok(())
    }
}
