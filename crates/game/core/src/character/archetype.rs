use crate::config::CombatConfig;

/// Fighting style, fixed when a character is created.
///
/// The archetype only determines attack range.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    /// Close combat, 2 m reach
    Melee,
    /// Bows and spells, 20 m reach
    Ranged,
}

impl Archetype {
    pub const fn attack_range_in_meters(self) -> f64 {
        match self {
            Self::Melee => CombatConfig::MELEE_RANGE_METERS,
            Self::Ranged => CombatConfig::RANGED_RANGE_METERS,
        }
    }
}
