use std::fmt;

/// One race: its total `time` and the record `distance` to beat.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Race {
  pub time: u64,
  pub distance: u64,
}

impl Race {
  pub const fn new(time: u64, distance: u64) -> Race {
    Race { time, distance }
  }
}

impl fmt::Display for Race {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Race:(time {}, record {})", self.time, self.distance)
  }
}

/// Races whose counts are multiplied together into one reported value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Group {
  pub label: &'static str,
  pub races: &'static [Race],
}

pub const GROUPS: [Group; 4] = [
  Group {
    label: "example races",
    races: &[Race::new(7, 9), Race::new(15, 40), Race::new(30, 200)],
  },
  Group {
    label: "puzzle races",
    races: &[
      Race::new(41, 214),
      Race::new(96, 1789),
      Race::new(88, 1127),
      Race::new(94, 1055),
    ],
  },
  Group {
    label: "combined example race",
    races: &[Race::new(71530, 940200)],
  },
  Group {
    label: "combined puzzle race",
    races: &[Race::new(41968894, 214178911271055)],
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_every_race_has_real_roots() {
    for group in GROUPS.iter() {
      assert!(!group.races.is_empty(), "{}", group.label);
      for race in group.races {
        let square = race.time as u128 * race.time as u128;
        assert!(square >= 4 * race.distance as u128, "{}", race);
      }
    }
  }

  #[test]
  fn test_display() {
    assert_eq!(Race::new(7, 9).to_string(), "Race:(time 7, record 9)");
  }
}
