//! Range check deciding whether an attack connects.

use core::cmp::Ordering;

/// Whether an attack at `distance_in_meters` connects with `range_in_meters`.
///
/// Only a distance strictly beyond the range is rejected, so a melee attack
/// at exactly 2.0 m lands and an unordered (NaN) distance is not refused.
pub fn within_range(distance_in_meters: f64, range_in_meters: f64) -> bool {
    distance_in_meters.partial_cmp(&range_in_meters) != Some(Ordering::Greater)
}
