//! Destructible scenery.

use crate::amount::Amount;
use crate::combat::Attackable;

/// A damageable object with nothing but health.
///
/// Health only goes down; once it reaches zero the thing stays destroyed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thing {
    health: Amount,
}

impl Thing {
    pub fn new(initial_health: Amount) -> Self {
        Self {
            health: initial_health,
        }
    }

    pub fn health(&self) -> Amount {
        self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_zero()
    }
}

impl Attackable for Thing {
    fn receive_damage(&mut self, damage: Amount) {
        self.health -= damage;
        tracing::trace!(health = %self.health, "thing received {}", damage);
    }

    fn health(&self) -> Amount {
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroyed_after_more_damage_than_remaining_health() {
        let mut thing = Thing::new(Amount::from(500));

        thing.receive_damage(Amount::from(600));

        assert!(thing.is_destroyed());
        assert_eq!(thing.health(), Amount::ZERO);
    }

    #[test]
    fn intact_while_health_remains() {
        let mut thing = Thing::new(Amount::from(500));

        thing.receive_damage(Amount::from(499));

        assert!(!thing.is_destroyed());
        assert_eq!(thing.health(), Amount::from(1));
    }
}
