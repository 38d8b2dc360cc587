use crate::action::ActionTransition;
use crate::amount::Amount;
use crate::combat::AttackOutcome;
use crate::encounter::{Encounter, EncounterError, EntityId};

/// Offensive action against a target entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: EntityId,
    pub target: EntityId,
    pub damage: Amount,
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_in_meters: f64,
}

impl AttackAction {
    /// Adjacent attack (distance 0).
    pub fn new(actor: EntityId, target: EntityId, damage: Amount) -> Self {
        Self {
            actor,
            target,
            damage,
            distance_in_meters: 0.0,
        }
    }

    #[must_use]
    pub fn at_distance(mut self, distance_in_meters: f64) -> Self {
        self.distance_in_meters = distance_in_meters;
        self
    }
}

impl ActionTransition for AttackAction {
    type Error = EncounterError;
    type Result = AttackOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, encounter: &Encounter) -> Result<(), Self::Error> {
        encounter.character(self.actor)?;
        encounter.combatant(self.target)?;
        Ok(())
    }

    fn apply(&self, encounter: &mut Encounter) -> Result<Self::Result, Self::Error> {
        encounter.attack(self.actor, self.target, self.damage, self.distance_in_meters)
    }
}

/// Heal the actor itself or an allied character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealAction {
    pub actor: EntityId,
    pub target: EntityId,
    pub healing: Amount,
}

impl HealAction {
    pub fn new(actor: EntityId, target: EntityId, healing: Amount) -> Self {
        Self {
            actor,
            target,
            healing,
        }
    }

    pub fn on_self(actor: EntityId, healing: Amount) -> Self {
        Self::new(actor, actor, healing)
    }
}

impl ActionTransition for HealAction {
    type Error = EncounterError;
    type Result = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, encounter: &Encounter) -> Result<(), Self::Error> {
        encounter.character(self.actor)?;
        encounter.character(self.target)?;
        Ok(())
    }

    fn apply(&self, encounter: &mut Encounter) -> Result<Self::Result, Self::Error> {
        encounter.heal(self.actor, self.target, self.healing)
    }
}
