//! Combat rules for a turn-less tabletop RPG.
//!
//! `combat-core` models damage, healing, health clamping, faction alliance and
//! level-based damage scaling. [`Character`] is the combatant; anything that can
//! be hit implements [`Attackable`], including plain [`Thing`]s. Quantities are
//! [`Amount`]s, which never go below zero.
//!
//! Rule violations a caller must avoid surface as [`CombatError`]. Gameplay
//! no-ops (out of range, friendly fire) are reported as [`AttackOutcome`]
//! variants instead. Id-addressed play goes through [`Encounter`].
pub mod action;
pub mod amount;
pub mod character;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod error;
pub mod thing;

pub use action::{
    ActionTransition, AttackAction, HealAction, JoinFactionAction, LeaveFactionAction,
    LevelUpAction,
};
pub use amount::Amount;
pub use character::{Archetype, Character, CombatError, Factions};
pub use combat::{AttackOutcome, Attackable, DamageScaling, effective_damage};
pub use config::CombatConfig;
pub use encounter::{Combatant, Encounter, EncounterError, EntityId};
pub use error::{ErrorSeverity, GameError};
pub use thing::Thing;
