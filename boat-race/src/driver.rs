use std::convert::TryFrom;
use std::str::FromStr;

use integer_math::quadratic;
use tracing::{debug, info};

use crate::brute_force;
use crate::count::count;
use crate::error::Error;
use crate::race::{Group, Race};
use crate::roots::solve;

/// How a race's winning charges are counted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Method {
  /// Floating-point roots, counted with the bounds pulled in by [`crate::count::EPSILON`].
  Epsilon,
  /// Integer arithmetic throughout; no rounding at any magnitude.
  Exact,
}

impl Default for Method {
  fn default() -> Method {
    Method::Epsilon
  }
}

impl FromStr for Method {
  type Err = Error;

  fn from_str(name: &str) -> Result<Method, Error> {
    match name {
      "epsilon" => Ok(Method::Epsilon),
      "exact" => Ok(Method::Exact),
      _ => Err(Error::UnknownMethod {
        name: name.to_string(),
      }),
    }
  }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Config {
  pub method: Method,
  /// Also count every race by enumeration, and fail if the two disagree.
  pub verify: bool,
}

pub fn count_race(race: &Race, config: &Config) -> Result<i64, Error> {
  let counted = match config.method {
    Method::Epsilon => {
      let interval = solve(race.time, race.distance)?;
      let counted = count(&interval);
      debug!(%race, %interval, counted, "counted race from its roots");
      counted
    }
    Method::Exact => {
      let counted = quadratic::count_winning_charges(race.time, race.distance)?;
      debug!(%race, counted, "counted race exactly");
      i64::try_from(counted).map_err(|_| Error::Overflow {
        context: format!("converting the count for {}", race),
      })?
    }
  };
  if config.verify {
    let expected = brute_force::count_winning_charges(race);
    if i64::try_from(expected).ok() != Some(counted) {
      return Err(Error::VerificationFailed {
        time: race.time,
        distance: race.distance,
        counted,
        expected,
      });
    }
  }
  Ok(counted)
}

/// The product of the counts of every race in the group.
pub fn evaluate_group(group: &Group, config: &Config) -> Result<i64, Error> {
  let mut product: i64 = 1;
  for race in group.races {
    let counted = count_race(race, config)?;
    product = product
      .checked_mul(counted)
      .ok_or_else(|| Error::Overflow {
        context: format!("multiplying the counts of the {}", group.label),
      })?;
  }
  info!(group = group.label, product, "evaluated group");
  Ok(product)
}

/// Evaluate each group in order, stopping at the first error.
pub fn run(groups: &[Group], config: &Config) -> Result<Vec<i64>, Error> {
  groups
    .iter()
    .map(|group| evaluate_group(group, config))
    .collect()
}
