/// Combat rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Level difference at which damage scaling applies. Always at least 1.
    pub level_gap: u32,
    /// Multiplier used when the victim out-levels the attacker by `level_gap`.
    pub weakened_multiplier: f64,
    /// Multiplier used when the attacker out-levels the victim by `level_gap`.
    pub empowered_multiplier: f64,
}

impl CombatConfig {
    // ===== fixed rules =====
    /// Health cap for every character. Writes above it are clamped.
    pub const MAX_HEALTH: f64 = 1000.0;
    pub const STARTING_LEVEL: u32 = 1;
    pub const MELEE_RANGE_METERS: f64 = 2.0;
    pub const RANGED_RANGE_METERS: f64 = 20.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_GAP: u32 = 5;
    pub const DEFAULT_WEAKENED_MULTIPLIER: f64 = 0.5;
    pub const DEFAULT_EMPOWERED_MULTIPLIER: f64 = 1.5;

    pub fn new() -> Self {
        Self {
            level_gap: Self::DEFAULT_LEVEL_GAP,
            weakened_multiplier: Self::DEFAULT_WEAKENED_MULTIPLIER,
            empowered_multiplier: Self::DEFAULT_EMPOWERED_MULTIPLIER,
        }
    }

    #[must_use]
    pub fn with_level_gap(mut self, level_gap: u32) -> Self {
        self.level_gap = level_gap.max(1);
        self
    }

    #[must_use]
    pub fn with_multipliers(mut self, weakened: f64, empowered: f64) -> Self {
        self.weakened_multiplier = weakened;
        self.empowered_multiplier = empowered;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
