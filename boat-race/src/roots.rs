use std::fmt;

use integer_math::quadratic;
use tracing::trace;

use crate::error::Error;

/**

The open interval between the two real roots of `t^2 - time*t + distance`.

Every charge strictly inside it travels further than the record; a charge that lands
exactly on a root only ties it.

*/
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Interval {
  pub low: f64,
  pub high: f64,
}

impl fmt::Display for Interval {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Interval:({},{})", self.low, self.high)
  }
}

/// Solve `t * (time - t) = distance` for both roots, `(time ± sqrt(time^2 - 4*distance)) / 2`.
///
/// The discriminant is computed exactly in integers before it is converted to a float,
/// so a negative one is always reported rather than turning into a NaN.
pub fn solve(time: u64, distance: u64) -> Result<Interval, Error> {
  let discriminant = quadratic::discriminant(time, distance)?;
  let delta = (discriminant as f64).sqrt();
  let time = time as f64;
  let interval = Interval {
    low: (time - delta) / 2.0,
    high: (time + delta) / 2.0,
  };
  trace!(discriminant = %discriminant, %interval, "solved race");
  Ok(interval)
}
