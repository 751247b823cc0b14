use crate::roots::Interval;

/// How far both bounds are pulled inwards before rounding, so that a root which is
/// mathematically an integer but computed as slightly off one is still excluded.
pub const EPSILON: f64 = 0.000001;

/// Count the integers `n` with `low < n < high`.
///
/// This is `floor(high - EPSILON) - ceil(low + EPSILON) + 1`, unclamped: an interval
/// narrower than `2 * EPSILON` around an integer comes out as -1.
pub fn count(interval: &Interval) -> i64 {
  let last = (interval.high - EPSILON).floor() as i64;
  let first = (interval.low + EPSILON).ceil() as i64;
  last - first + 1
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::brute_force;
  use crate::race::Race;
  use crate::roots::solve;
  use proptest::prelude::*;

  #[test]
  fn test_count() {
    let inputs: Vec<(f64, f64, i64)> = vec![
      (1.697, 5.303, 4),
      (3.0, 7.0, 3),
      (4.0, 6.0, 1),
      (2.5, 3.5, 1),
      (0.0, 1.0, 0),
      (5.0, 5.0, -1),
      (10.0 - 1e-9, 20.0 + 1e-9, 9),
      (13.146551542253292, 71516.85344845775, 71503),
    ];
    for (low, high, result) in inputs {
      println!("{:?}", (low, high, result));
      assert_eq!(count(&Interval { low, high }), result);
    }
  }

  #[test]
  fn test_integral_roots() {
    // roots at exactly 3 and 7
    assert_eq!(count(&solve(10, 21).unwrap()), 3);
    assert_eq!(brute_force::count_winning_charges(&Race::new(10, 21)), 3);
  }

  proptest! {
    #[test]
    fn randomly_test_count_matches_enumeration(
      (time, distance) in (1u64..1000).prop_flat_map(|time| (Just(time), 0..(time * time + 3) / 4))
    ) {
      let result = count(&solve(time, distance).unwrap());
      let expected = brute_force::count_winning_charges(&Race::new(time, distance));
      prop_assert_eq!(result, expected as i64)
    }
  }
}
