//! Level-gap damage scaling.

use crate::amount::Amount;
use crate::config::CombatConfig;

/// Which scaling rule an attack falls under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageScaling {
    /// Victim out-levels the attacker by at least the configured gap.
    Weakened,
    /// Attacker out-levels the victim by at least the configured gap.
    Empowered,
    /// Levels are within the gap; damage passes through.
    Unscaled,
}

impl DamageScaling {
    pub fn multiplier(self, config: &CombatConfig) -> f64 {
        match self {
            Self::Weakened => config.weakened_multiplier,
            Self::Empowered => config.empowered_multiplier,
            Self::Unscaled => 1.0,
        }
    }
}

/// Classify an attack by the level difference between attacker and victim.
///
/// The two scaled rules are mutually exclusive because `level_gap >= 1`.
pub fn scaling_for(attacker_level: u32, victim_level: u32, config: &CombatConfig) -> DamageScaling {
    if victim_level.saturating_sub(attacker_level) >= config.level_gap {
        DamageScaling::Weakened
    } else if attacker_level.saturating_sub(victim_level) >= config.level_gap {
        DamageScaling::Empowered
    } else {
        DamageScaling::Unscaled
    }
}

/// Calculate the damage a character-vs-character attack actually deals.
///
/// # Formula
///
/// ```text
/// victim.level - attacker.level >= gap  => damage * weakened   (0.5)
/// attacker.level - victim.level >= gap  => damage * empowered  (1.5)
/// otherwise                             => damage
/// ```
pub fn effective_damage(
    attacker_level: u32,
    victim_level: u32,
    damage: Amount,
    config: &CombatConfig,
) -> Amount {
    match scaling_for(attacker_level, victim_level, config) {
        DamageScaling::Unscaled => damage,
        scaling => damage * scaling.multiplier(config),
    }
}
