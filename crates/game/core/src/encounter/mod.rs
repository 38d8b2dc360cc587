//! Id-addressed ownership of combatants.
//!
//! An `Encounter` owns every character and thing taking part in a fight and
//! routes operations by [`EntityId`]. This is the only place where an entity
//! can name itself as a target, so it is where self-attacks are rejected.
//!
//! All mutation takes `&mut self`, so operations are serialized per encounter.

pub mod entity;
pub mod error;

pub use entity::{Combatant, EntityId};
pub use error::EncounterError;

use std::collections::BTreeMap;

use crate::action::ActionTransition;
use crate::amount::Amount;
use crate::character::{Character, CombatError};
use crate::combat::{AttackOutcome, Attackable};
use crate::config::CombatConfig;
use crate::thing::Thing;

#[derive(Clone, Debug, Default)]
pub struct Encounter {
    config: CombatConfig,
    combatants: BTreeMap<EntityId, Combatant>,
    next_id: u32,
}

impl Encounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CombatConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    // ===== membership =====

    pub fn spawn_character(&mut self, character: Character) -> Result<EntityId, EncounterError> {
        self.spawn(character.into())
    }

    pub fn spawn_thing(&mut self, thing: Thing) -> Result<EntityId, EncounterError> {
        self.spawn(thing.into())
    }

    fn spawn(&mut self, combatant: Combatant) -> Result<EntityId, EncounterError> {
        let id = self.allocate_id()?;
        match &combatant {
            Combatant::Character(character) => {
                tracing::debug!("spawned {} ({})", id, character.archetype())
            }
            Combatant::Thing(_) => tracing::debug!("spawned {} (thing)", id),
        }
        self.combatants.insert(id, combatant);
        Ok(id)
    }

    fn allocate_id(&mut self) -> Result<EntityId, EncounterError> {
        let current = self.next_id;
        self.next_id = current
            .checked_add(1)
            .ok_or(EncounterError::EntityIdOverflow { current })?;
        Ok(EntityId(current))
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Ids in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.combatants.keys().copied()
    }

    pub fn combatant(&self, id: EntityId) -> Result<&Combatant, EncounterError> {
        self.combatants
            .get(&id)
            .ok_or(EncounterError::EntityNotFound(id))
    }

    pub fn character(&self, id: EntityId) -> Result<&Character, EncounterError> {
        match self.combatant(id)? {
            Combatant::Character(character) => Ok(character),
            Combatant::Thing(_) => Err(EncounterError::NotACharacter(id)),
        }
    }

    fn character_mut(&mut self, id: EntityId) -> Result<&mut Character, EncounterError> {
        self.combatants
            .get_mut(&id)
            .ok_or(EncounterError::EntityNotFound(id))?
            .as_character_mut()
            .ok_or(EncounterError::NotACharacter(id))
    }

    // ===== combat =====

    /// `attacker` attacks `victim` from `distance_in_meters` away.
    ///
    /// Range and friendly-fire are screened first, then self-targeting is
    /// rejected. A character attacking itself while in any faction is its own
    /// ally, so that case is a `Friendly` no-op rather than an error.
    pub fn attack(
        &mut self,
        attacker: EntityId,
        victim: EntityId,
        damage: Amount,
        distance_in_meters: f64,
    ) -> Result<AttackOutcome, EncounterError> {
        // Snapshot the attacker so the victim can be borrowed mutably.
        let snapshot = self.character(attacker)?.clone();
        let target = self
            .combatants
            .get_mut(&victim)
            .ok_or(EncounterError::EntityNotFound(victim))?;

        if let Some(noop) = snapshot.screen_attack(target.as_character(), distance_in_meters) {
            return Ok(noop);
        }
        if attacker == victim {
            tracing::warn!("{} tried to attack itself", attacker);
            return Err(CombatError::CannotAttackItself.into());
        }

        let outcome = snapshot.strike(target, damage, &self.config);
        tracing::debug!("{} -> {}: {:?}", attacker, victim, outcome);
        Ok(outcome)
    }

    /// `healer` heals `target`. Healing yourself needs no alliance.
    pub fn heal(
        &mut self,
        healer: EntityId,
        target: EntityId,
        healing: Amount,
    ) -> Result<(), EncounterError> {
        if healer == target {
            self.character_mut(target)?.heal(healing)?;
            return Ok(());
        }
        let snapshot = self.character(healer)?.clone();
        snapshot.heal_other(self.character_mut(target)?, healing)?;
        Ok(())
    }

    // ===== progression & factions =====

    pub fn increase_level(&mut self, id: EntityId) -> Result<(), EncounterError> {
        self.character_mut(id)?.increase_level();
        Ok(())
    }

    pub fn join(&mut self, id: EntityId, faction: &str) -> Result<(), EncounterError> {
        self.character_mut(id)?.join(faction);
        Ok(())
    }

    pub fn leave(&mut self, id: EntityId, faction: &str) -> Result<(), EncounterError> {
        self.character_mut(id)?.leave(faction);
        Ok(())
    }

    /// Run an action through its validation and application hooks.
    ///
    /// A `pre_validate` failure leaves the encounter untouched.
    pub fn execute<A: ActionTransition>(&mut self, action: &A) -> Result<A::Result, A::Error> {
        action.pre_validate(self)?;
        let result = action.apply(self)?;
        action.post_validate(self)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encounter_with_two() -> (Encounter, EntityId, EntityId) {
        let mut encounter = Encounter::new();
        let a = encounter.spawn_character(Character::melee()).unwrap();
        let b = encounter.spawn_character(Character::melee()).unwrap();
        (encounter, a, b)
    }

    #[test]
    fn allocates_sequential_ids() {
        let (mut encounter, a, b) = encounter_with_two();
        let rock = encounter.spawn_thing(Thing::new(Amount::from(50))).unwrap();

        assert_eq!((a, b, rock), (EntityId(0), EntityId(1), EntityId(2)));
        assert_eq!(encounter.ids().collect::<Vec<_>>(), vec![a, b, rock]);
        assert_eq!(encounter.len(), 3);
    }

    #[test]
    fn id_overflow_is_fatal() {
        let mut encounter = Encounter::new();
        encounter.next_id = u32::MAX;

        let err = encounter.spawn_character(Character::melee()).unwrap_err();

        assert_eq!(err, EncounterError::EntityIdOverflow { current: u32::MAX });
        assert!(encounter.is_empty());
    }

    #[test]
    fn attack_by_id() {
        let (mut encounter, a, b) = encounter_with_two();

        let outcome = encounter.attack(a, b, Amount::from(500), 0.0).unwrap();

        assert_eq!(outcome.damage_dealt(), Amount::from(500));
        assert_eq!(encounter.character(b).unwrap().health(), Amount::from(500));
        assert_eq!(encounter.character(a).unwrap().health(), Amount::from(1000));
    }

    #[test]
    fn self_attack_is_rejected_without_damage() {
        let (mut encounter, a, _) = encounter_with_two();

        let err = encounter.attack(a, a, Amount::from(200), 0.0).unwrap_err();

        assert_eq!(err, EncounterError::Rule(CombatError::CannotAttackItself));
        assert_eq!(encounter.character(a).unwrap().health(), Amount::from(1000));
    }

    #[test]
    fn self_attack_screens_range_and_alliance_first() {
        let (mut encounter, a, _) = encounter_with_two();

        let far = encounter.attack(a, a, Amount::from(200), 5.0).unwrap();
        assert!(matches!(far, AttackOutcome::OutOfRange { .. }));

        encounter.join(a, "guild").unwrap();
        let friendly = encounter.attack(a, a, Amount::from(200), 0.0).unwrap();
        assert_eq!(friendly, AttackOutcome::Friendly);
    }

    #[test]
    fn things_cannot_attack() {
        let (mut encounter, a, _) = encounter_with_two();
        let rock = encounter.spawn_thing(Thing::new(Amount::from(50))).unwrap();

        assert_eq!(
            encounter.attack(rock, a, Amount::from(10), 0.0),
            Err(EncounterError::NotACharacter(rock))
        );
    }

    #[test]
    fn attacking_a_thing_by_id() {
        let (mut encounter, a, _) = encounter_with_two();
        let rock = encounter.spawn_thing(Thing::new(Amount::from(50))).unwrap();

        encounter.attack(a, rock, Amount::from(80), 1.0).unwrap();

        let rock = encounter.combatant(rock).unwrap();
        assert!(rock.as_thing().is_some_and(Thing::is_destroyed));
        assert!(encounter.combatant(a).unwrap().as_thing().is_none());
        assert!(rock.is_down());
        assert_eq!(rock.health(), Amount::ZERO);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let (mut encounter, a, _) = encounter_with_two();
        let ghost = EntityId(99);

        assert_eq!(
            encounter.attack(a, ghost, Amount::from(1), 0.0),
            Err(EncounterError::EntityNotFound(ghost))
        );
        assert_eq!(
            encounter.heal(ghost, a, Amount::from(1)),
            Err(EncounterError::EntityNotFound(ghost))
        );
        assert_eq!(
            encounter.increase_level(ghost),
            Err(EncounterError::EntityNotFound(ghost))
        );
    }

    #[test]
    fn self_heal_skips_alliance_check() {
        let (mut encounter, a, b) = encounter_with_two();
        encounter.attack(b, a, Amount::from(300), 0.0).unwrap();

        encounter.heal(a, a, Amount::from(100)).unwrap();

        assert_eq!(encounter.character(a).unwrap().health(), Amount::from(800));
    }

    #[test]
    fn healing_others_requires_alliance() {
        let (mut encounter, a, b) = encounter_with_two();
        encounter.attack(a, b, Amount::from(300), 0.0).unwrap();

        assert_eq!(
            encounter.heal(a, b, Amount::from(100)),
            Err(EncounterError::Rule(CombatError::CannotHeal))
        );

        encounter.join(a, "guild").unwrap();
        encounter.join(b, "guild").unwrap();
        encounter.heal(a, b, Amount::from(100)).unwrap();
        assert_eq!(encounter.character(b).unwrap().health(), Amount::from(800));
    }

    #[test]
    fn uses_configured_scaling() {
        let mut encounter =
            Encounter::with_config(CombatConfig::new().with_level_gap(1).with_multipliers(0.5, 2.0));
        let a = encounter.spawn_character(Character::ranged()).unwrap();
        let b = encounter.spawn_character(Character::ranged()).unwrap();
        encounter.increase_level(a).unwrap();

        let outcome = encounter.attack(a, b, Amount::from(100), 15.0).unwrap();

        assert_eq!(encounter.config().level_gap, 1);
        assert_eq!(outcome, AttackOutcome::Hit { damage: Amount::from(200) });
    }
}
