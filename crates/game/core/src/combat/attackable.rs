//! The damage-receiving seam shared by characters and scenery.

use crate::amount::Amount;
use crate::character::Character;

/// Anything that can be damaged.
///
/// `Character` and `Thing` are independent implementors; attacks dispatch
/// through this trait so scenery and combatants are targeted the same way.
pub trait Attackable {
    /// Reduces health by `damage`. Health floors at zero.
    fn receive_damage(&mut self, damage: Amount);

    /// Current health.
    fn health(&self) -> Amount;

    /// Returns the character behind this target, if it is one.
    ///
    /// Level scaling and the friendly-fire rule only apply to characters.
    fn as_character(&self) -> Option<&Character> {
        None
    }
}
