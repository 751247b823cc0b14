//! Reference counts by trying every charge.

use integer_math::quadratic::distance_travelled;

use crate::race::Race;

/// The number of charges in `[0, time]` that travel strictly further than the record.
pub fn count_winning_charges(race: &Race) -> u64 {
  let record = u128::from(race.distance);
  (0..=race.time)
    .filter(|&charge| distance_travelled(charge, race.time) > record)
    .count() as u64
}
