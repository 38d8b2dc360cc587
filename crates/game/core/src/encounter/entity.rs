use core::fmt;

use crate::amount::Amount;
use crate::character::Character;
use crate::combat::Attackable;
use crate::thing::Thing;

/// Unique identifier of a combatant within an [`Encounter`](super::Encounter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything an encounter owns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combatant {
    Character(Character),
    Thing(Thing),
}

impl Combatant {
    pub fn as_thing(&self) -> Option<&Thing> {
        match self {
            Self::Thing(thing) => Some(thing),
            Self::Character(_) => None,
        }
    }

    pub fn as_character_mut(&mut self) -> Option<&mut Character> {
        match self {
            Self::Character(character) => Some(character),
            Self::Thing(_) => None,
        }
    }

    /// Dead for characters, destroyed for things.
    pub fn is_down(&self) -> bool {
        match self {
            Self::Character(character) => character.is_dead(),
            Self::Thing(thing) => thing.is_destroyed(),
        }
    }
}

impl Attackable for Combatant {
    fn receive_damage(&mut self, damage: Amount) {
        match self {
            Self::Character(character) => character.receive_damage(damage),
            Self::Thing(thing) => thing.receive_damage(damage),
        }
    }

    fn health(&self) -> Amount {
        match self {
            Self::Character(character) => character.health(),
            Self::Thing(thing) => thing.health(),
        }
    }

    fn as_character(&self) -> Option<&Character> {
        match self {
            Self::Character(character) => Some(character),
            Self::Thing(_) => None,
        }
    }
}

impl From<Character> for Combatant {
    fn from(character: Character) -> Self {
        Self::Character(character)
    }
}

impl From<Thing> for Combatant {
    fn from(thing: Thing) -> Self {
        Self::Thing(thing)
    }
}
