extern crate failure;
extern crate num;
#[cfg(test)]
extern crate proptest;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use std::convert::TryInto;
use std::fmt::{Debug, Display};
use std::mem;
use std::ops::{AddAssign, MulAssign, Shl, Shr, SubAssign};

pub trait Integer:
  'static
  + num::PrimInt
  + num::Integer
  + num::FromPrimitive
  + AddAssign<Self>
  + SubAssign<Self>
  + MulAssign<Self>
  + Shl<u32, Output = Self>
  + Shr<u32, Output = Self>
  + Debug
  + Display
  + Send
  + Sync
{
  /// The number of bits that carry magnitude, i.e. every bit except the sign bit.
  fn nonsign_bits() -> u32 {
    let bits = (mem::size_of::<Self>() * 8) as u32;
    if Self::min_value() < Self::zero() {
      bits - 1
    } else {
      bits
    }
  }
}
impl<
    T: 'static
      + num::PrimInt
      + num::Integer
      + num::FromPrimitive
      + AddAssign<Self>
      + SubAssign<Self>
      + MulAssign<Self>
      + Shl<u32, Output = Self>
      + Shr<u32, Output = Self>
      + Debug
      + Display
      + Send
      + Sync,
  > Integer for T
{
}

/// An integer type with a partner type that can hold the product of any two of its values.
pub trait DoubleSizedInteger: Integer {
  type Type: Integer + From<Self> + TryInto<Self>;
}
pub type DoubleSized<T> = <T as DoubleSizedInteger>::Type;

macro_rules! impl_double_sized_integer {
  ($(($Integer: ident, $Double: ident),)*) => {
    $(
      impl DoubleSizedInteger for $Integer {
        type Type = $Double;
      }
    )*
  }
}
impl_double_sized_integer!(
  (u8, u16),
  (u16, u32),
  (u32, u64),
  (u64, u128),
);

/// Compute the arithmetic mean of two integers, rounded towards negative infinity. Never overflows.
pub fn mean_floor<T: Integer>(first: T, second: T) -> T {
  (first >> 1u32) + (second >> 1u32) + (first & second & T::one())
}

/// The largest integer whose square does not exceed `input`, or None if `input` is negative.
///
/// Works one bit at a time from the top, so it is exact for every value of the type
/// and never overflows.
pub fn isqrt_floor<T: Integer>(input: T) -> Option<T> {
  if input < T::zero() {
    return None;
  }
  let mut result = T::zero();
  let mut move_size = T::one() << ((T::nonsign_bits() + 1) >> 1);
  while move_size > T::zero() {
    let candidate = result + move_size;
    if candidate
      .checked_mul(&candidate)
      .map_or(false, |square| square <= input)
    {
      result = candidate;
    }
    move_size = move_size >> 1u32;
  }
  Some(result)
}

pub mod quadratic;
