//! Counting the button-charge times that win a boat race.
//!
//! Holding the button for `t` out of a race's `T` time units moves the boat
//! `t * (T - t)`; a charge wins when that is strictly further than the record `D`.
//! [`roots`] and [`count`] solve this with floating-point roots and an epsilon-guarded
//! integer count, [`boat_race_integer_math::quadratic`] solves it exactly, and
//! [`brute_force`] enumerates every charge as a reference.

extern crate boat_race_integer_math as integer_math;
extern crate failure;
#[cfg(test)]
extern crate proptest;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod brute_force;
pub mod count;
pub mod driver;
pub mod error;
pub mod race;
pub mod roots;

pub use crate::driver::{count_race, evaluate_group, run, Config, Method};
pub use crate::error::Error;
pub use crate::race::{Group, Race, GROUPS};
pub use crate::roots::Interval;
