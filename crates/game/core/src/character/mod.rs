//! The combatant.
//!
//! A `Character` tracks health (capped at [`CombatConfig::MAX_HEALTH`]),
//! level and faction membership, and can attack any [`Attackable`] and heal
//! itself or its allies.
//!
//! # Identity
//!
//! An attacker is borrowed as `&self` and its victim as `&mut`, so a character
//! can never be handed to its own `attack`/`heal_other`. Identity-addressed
//! calls go through [`Encounter`](crate::encounter::Encounter), which reports
//! [`CombatError::CannotAttackItself`] for self-targeting.

pub mod archetype;
pub mod error;
pub mod faction;

pub use archetype::Archetype;
pub use error::CombatError;
pub use faction::Factions;

use crate::amount::Amount;
use crate::combat::{AttackOutcome, Attackable, effective_damage, within_range};
use crate::config::CombatConfig;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    archetype: Archetype,
    health: Amount,
    level: u32,
    factions: Factions,
}

impl Character {
    /// Fresh character at full health and the starting level.
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            health: max_health(),
            level: CombatConfig::STARTING_LEVEL,
            factions: Factions::new(),
        }
    }

    pub fn melee() -> Self {
        Self::new(Archetype::Melee)
    }

    pub fn ranged() -> Self {
        Self::new(Archetype::Ranged)
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn health(&self) -> Amount {
        self.health
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Factions in the order they were joined.
    pub fn factions(&self) -> &[String] {
        self.factions.as_slice()
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_zero()
    }

    fn attack_range_in_meters(&self) -> f64 {
        self.archetype.attack_range_in_meters()
    }

    // Every health write goes through here to keep the cap.
    fn set_health(&mut self, value: Amount) {
        self.health = Amount::min(value, max_health());
    }

    // ===== attacking =====

    /// Attack an adjacent target.
    pub fn attack(&self, victim: &mut (impl Attackable + ?Sized), damage: Amount) -> AttackOutcome {
        self.attack_from(victim, damage, 0.0)
    }

    /// Attack a target `distance_in_meters` away using the standard rules.
    pub fn attack_from(
        &self,
        victim: &mut (impl Attackable + ?Sized),
        damage: Amount,
        distance_in_meters: f64,
    ) -> AttackOutcome {
        self.attack_with(victim, damage, distance_in_meters, &CombatConfig::default())
    }

    /// Attack a target under the given rules.
    ///
    /// Out-of-range and friendly targets are silent no-ops. Otherwise the
    /// damage is scaled by level gap (characters only) and delivered.
    pub fn attack_with(
        &self,
        victim: &mut (impl Attackable + ?Sized),
        damage: Amount,
        distance_in_meters: f64,
        config: &CombatConfig,
    ) -> AttackOutcome {
        if let Some(noop) = self.screen_attack(victim.as_character(), distance_in_meters) {
            return noop;
        }
        self.strike(victim, damage, config)
    }

    /// Returns the no-op outcome if the attack is blocked before any damage
    /// is computed, `None` if it should land.
    pub(crate) fn screen_attack(
        &self,
        victim: Option<&Character>,
        distance_in_meters: f64,
    ) -> Option<AttackOutcome> {
        let range_in_meters = self.attack_range_in_meters();
        if !within_range(distance_in_meters, range_in_meters) {
            tracing::debug!(
                distance_in_meters,
                range_in_meters,
                "attack out of range, ignoring"
            );
            return Some(AttackOutcome::OutOfRange {
                distance_in_meters,
                range_in_meters,
            });
        }
        if victim.is_some_and(|victim| self.is_ally(victim)) {
            tracing::debug!("attack on ally {:?} ignored", victim.map(Character::factions));
            return Some(AttackOutcome::Friendly);
        }
        None
    }

    /// Deliver level-scaled damage. Assumes `screen_attack` let it through.
    pub(crate) fn strike(
        &self,
        victim: &mut (impl Attackable + ?Sized),
        damage: Amount,
        config: &CombatConfig,
    ) -> AttackOutcome {
        let damage = match victim.as_character() {
            Some(character) => effective_damage(self.level, character.level, damage, config),
            None => damage,
        };
        victim.receive_damage(damage);
        tracing::debug!(
            attacker_level = self.level,
            remaining = %victim.health(),
            "hit for {}",
            damage
        );
        AttackOutcome::Hit { damage }
    }

    // ===== healing =====

    /// Heal yourself.
    pub fn heal(&mut self, healing: Amount) -> Result<(), CombatError> {
        if self.is_dead() {
            tracing::warn!("refusing to heal a dead character");
            return Err(CombatError::DeadCharacter);
        }
        self.set_health(self.health + healing);
        tracing::debug!(health = %self.health, "healed by {}", healing);
        Ok(())
    }

    /// Heal another character, who must be an ally and alive.
    ///
    /// The healer's own health is not checked: a dead character can still heal.
    pub fn heal_other(&self, target: &mut Character, healing: Amount) -> Result<(), CombatError> {
        if !self.is_ally(target) {
            tracing::warn!(
                "cannot heal non-ally {:?} from {:?}",
                target.factions(),
                self.factions()
            );
            return Err(CombatError::CannotHeal);
        }
        target.heal(healing)
    }

    // ===== progression & factions =====

    pub fn increase_level(&mut self) {
        self.level = self.level.saturating_add(1);
        tracing::trace!(level = self.level, "level up");
    }

    /// Join a faction. Joining twice has no further effect.
    pub fn join(&mut self, faction: &str) {
        if self.factions.join(faction) {
            tracing::trace!(faction, "joined faction");
        }
    }

    /// Leave a faction. Leaving one you are not in is a no-op.
    pub fn leave(&mut self, faction: &str) {
        if self.factions.leave(faction) {
            tracing::trace!(faction, "left faction");
        }
    }

    pub fn is_member_of(&self, faction: &str) -> bool {
        self.factions.contains(faction)
    }

    /// Allies share at least one faction. Symmetric.
    pub fn is_ally(&self, other: &Character) -> bool {
        self.factions.intersects(&other.factions)
    }
}

fn max_health() -> Amount {
    Amount::new(CombatConfig::MAX_HEALTH)
}

impl Attackable for Character {
    fn receive_damage(&mut self, damage: Amount) {
        self.set_health(self.health - damage);
    }

    fn health(&self) -> Amount {
        self.health
    }

    fn as_character(&self) -> Option<&Character> {
        Some(self)
    }
}
