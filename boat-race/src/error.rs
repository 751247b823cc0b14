use failure::Fail;

use integer_math::quadratic;

#[derive(Clone, PartialEq, Eq, Debug, Fail)]
pub enum Error {
  #[fail(
    display = "race with time {} and distance {} has no real roots ({}^2 - 4*{} is negative)",
    time, distance, time, distance
  )]
  NegativeDiscriminant { time: u64, distance: u64 },
  #[fail(display = "arithmetic overflow while {}", context)]
  Overflow { context: String },
  #[fail(
    display = "counted {} winning charges for time {} and distance {}, but enumeration finds {}",
    counted, time, distance, expected
  )]
  VerificationFailed {
    time: u64,
    distance: u64,
    counted: i64,
    expected: u64,
  },
  #[fail(
    display = "unknown counting method {:?} (expected \"epsilon\" or \"exact\")",
    name
  )]
  UnknownMethod { name: String },
}

impl From<quadratic::Error<u64>> for Error {
  fn from(error: quadratic::Error<u64>) -> Error {
    match error {
      quadratic::Error::NegativeDiscriminant { time, distance } => {
        Error::NegativeDiscriminant { time, distance }
      }
      quadratic::Error::Overflow { time, distance } => Error::Overflow {
        context: format!("solving for time {} and distance {}", time, distance),
      },
    }
  }
}
