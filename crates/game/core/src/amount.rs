//! Non-negative quantity used for health, damage and healing.
//!
//! Every constructor and arithmetic operator clamps its result at zero, so an
//! `Amount` can never hold a negative value. NaN and `-0.0` also collapse to
//! `0.0`, which keeps equality, hashing and ordering total.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A clamped, non-negative real number.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Self = Self(0.0);

    /// Creates an amount, clamping anything below zero (or NaN) to zero.
    pub fn new(value: f64) -> Self {
        Self(clamp(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns the lesser of two amounts.
    pub fn min(amount: Amount, other: Amount) -> Amount {
        if other < amount { other } else { amount }
    }
}

fn clamp(value: f64) -> f64 {
    // Also rejects NaN and normalizes -0.0.
    if value > 0.0 { value } else { 0.0 }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount::new(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount::new(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Amount {
    type Output = Amount;

    fn mul(self, scalar: f64) -> Amount {
        Amount::new(self.0 * scalar)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_amount_is_zero() {
        assert_eq!(Amount::from(-50), Amount::from(0));
        assert!(Amount::from(-50).is_zero());
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let a = Amount::from(100);
        let b = Amount::from(250);

        assert_eq!(a - b, Amount::ZERO);
        assert_eq!(b - a, Amount::from(150));
    }

    #[test]
    fn scalar_multiplication_clamps() {
        assert_eq!(Amount::from(100) * 0.5, Amount::from(50));
        assert_eq!(Amount::from(100) * 1.5, Amount::from(150));
        assert_eq!(Amount::from(100) * -2.0, Amount::ZERO);
    }

    #[test]
    fn nan_and_negative_zero_collapse_to_zero() {
        assert_eq!(Amount::new(f64::NAN), Amount::ZERO);
        assert_eq!(Amount::new(-0.0).value().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn min_picks_the_lesser_amount() {
        let small = Amount::from(10);
        let large = Amount::from(1000);

        assert_eq!(Amount::min(small, large), small);
        assert_eq!(Amount::min(large, small), small);
    }

    #[test]
    fn equal_amounts_hash_equally() {
        use std::collections::HashSet;

        let set: HashSet<Amount> = [Amount::from(-1), Amount::from(0), Amount::new(-0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_matches_debug() {
        let amount = Amount::from(500);

        assert_eq!(amount.to_string(), "Amount(500.0)");
        assert_eq!(amount.to_string(), format!("{amount:?}"));
    }

    #[test]
    fn sums_amounts() {
        let total: Amount = [1, 2, 3].into_iter().map(Amount::from).sum();
        assert_eq!(total, Amount::from(6));
    }
}
