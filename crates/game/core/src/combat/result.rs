//! Attack outcome types.

use crate::amount::Amount;

/// What an attack attempt did.
///
/// `OutOfRange` and `Friendly` are silent no-ops: nothing was mutated and the
/// caller is not expected to treat them as failures.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Damage was delivered to the target (after scaling).
    Hit { damage: Amount },
    /// Target was beyond the attacker's range.
    OutOfRange {
        distance_in_meters: f64,
        range_in_meters: f64,
    },
    /// Target is an ally; friendly fire is ignored.
    Friendly,
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Damage delivered, zero for the no-op outcomes.
    pub fn damage_dealt(&self) -> Amount {
        match self {
            Self::Hit { damage } => *damage,
            Self::OutOfRange { .. } | Self::Friendly => Amount::ZERO,
        }
    }
}
