//! Exact solutions of the race inequality `charge * (time - charge) > distance`.
//!
//! Everything here is computed in the double-sized partner type, so no intermediate
//! product can overflow and no rounding error is possible.

use failure::Fail;
use num::{CheckedMul, FromPrimitive, One, Saturating, Unsigned};
use std::cmp::min;
use std::convert::TryInto;

use super::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Fail)]
pub enum Error<T: Integer> {
  #[fail(
    display = "no real roots for time {} and distance {} ({}^2 - 4*{} is negative)",
    time, distance, time, distance
  )]
  NegativeDiscriminant { time: T, distance: T },
  #[fail(
    display = "overflow while solving for time {} and distance {}",
    time, distance
  )]
  Overflow { time: T, distance: T },
}

/// `time^2 - 4*distance`, the discriminant of `charge^2 - time*charge + distance`.
pub fn discriminant<T: DoubleSizedInteger + Unsigned>(
  time: T,
  distance: T,
) -> Result<DoubleSized<T>, Error<T>> {
  let overflow = || Error::Overflow { time, distance };
  let wide_time = <DoubleSized<T>>::from(time);
  let wide_distance = <DoubleSized<T>>::from(distance);
  let four = <DoubleSized<T>>::from_u8(4).ok_or_else(overflow)?;
  let square = wide_time.checked_mul(&wide_time).ok_or_else(overflow)?;
  let quadruple = wide_distance.checked_mul(&four).ok_or_else(overflow)?;
  if square < quadruple {
    return Err(Error::NegativeDiscriminant { time, distance });
  }
  Ok(square - quadruple)
}

/// How far the boat goes when the button is held for `charge` out of `time` units.
///
/// Charges longer than the race leave no time to move, so they travel nowhere.
pub fn distance_travelled<T: DoubleSizedInteger + Unsigned>(charge: T, time: T) -> DoubleSized<T> {
  <DoubleSized<T>>::from(charge) * <DoubleSized<T>>::from(time.saturating_sub(charge))
}

/// The smallest charge that travels strictly further than `distance`, or None if no charge does.
///
/// The integer square root of the discriminant pins the lower root down to within one unit;
/// a short bisection against the exact inequality then settles which side of it wins.
pub fn first_winning_charge<T: DoubleSizedInteger + Unsigned>(
  time: T,
  distance: T,
) -> Result<Option<T>, Error<T>> {
  let overflow = || Error::Overflow { time, distance };
  let root_span = isqrt_floor(discriminant(time, distance)?).ok_or_else(overflow)?;
  let one = <DoubleSized<T>>::one();
  let wide_time = <DoubleSized<T>>::from(time);
  let wide_distance = <DoubleSized<T>>::from(distance);
  let beats = |charge: DoubleSized<T>| charge * (wide_time - charge) > wide_distance;

  let peak = wide_time >> 1u32;
  if !beats(peak) {
    return Ok(None);
  }

  // The lower root lies in ((time - root_span - 1)/2, (time - root_span)/2].
  let mut losing = (wide_time - root_span).saturating_sub(one) >> 1u32;
  let mut winning = min(((wide_time - root_span) >> 1u32) + one, peak);
  while winning - losing > one {
    let middle = mean_floor(losing, winning);
    if beats(middle) {
      winning = middle;
    } else {
      losing = middle;
    }
  }
  winning.try_into().ok().map(Some).ok_or_else(overflow)
}

/// The inclusive `[first, last]` range of winning charges, or None if no charge wins.
///
/// The distance is symmetric around `time / 2`, so the last winner mirrors the first.
pub fn winning_charges<T: DoubleSizedInteger + Unsigned>(
  time: T,
  distance: T,
) -> Result<Option<[T; 2]>, Error<T>> {
  Ok(first_winning_charge(time, distance)?.map(|first| [first, time - first]))
}

/// The number of integer charges in `[0, time]` that travel strictly further than `distance`.
pub fn count_winning_charges<T: DoubleSizedInteger + Unsigned>(
  time: T,
  distance: T,
) -> Result<T, Error<T>> {
  Ok(match winning_charges(time, distance)? {
    Some([first, last]) => last - first + T::one(),
    None => T::zero(),
  })
}
