use crate::action::ActionTransition;
use crate::encounter::{Encounter, EncounterError, EntityId};

/// Raise a character's level by one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpAction {
    pub actor: EntityId,
}

impl LevelUpAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for LevelUpAction {
    type Error = EncounterError;
    type Result = u32;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, encounter: &mut Encounter) -> Result<Self::Result, Self::Error> {
        encounter.increase_level(self.actor)?;
        Ok(encounter.character(self.actor)?.level())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinFactionAction {
    pub actor: EntityId,
    pub faction: String,
}

impl JoinFactionAction {
    pub fn new(actor: EntityId, faction: impl Into<String>) -> Self {
        Self {
            actor,
            faction: faction.into(),
        }
    }
}

impl ActionTransition for JoinFactionAction {
    type Error = EncounterError;
    type Result = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, encounter: &mut Encounter) -> Result<Self::Result, Self::Error> {
        encounter.join(self.actor, &self.faction)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaveFactionAction {
    pub actor: EntityId,
    pub faction: String,
}

impl LeaveFactionAction {
    pub fn new(actor: EntityId, faction: impl Into<String>) -> Self {
        Self {
            actor,
            faction: faction.into(),
        }
    }
}

impl ActionTransition for LeaveFactionAction {
    type Error = EncounterError;
    type Result = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, encounter: &mut Encounter) -> Result<Self::Result, Self::Error> {
        encounter.leave(self.actor, &self.faction)
    }
}
