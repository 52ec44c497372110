//! Court format lookup by roster size

use serde::{Deserialize, Serialize};

use crate::error::CourtError;

/// Smallest roster that fills two courts
pub const MIN_ROSTER: usize = 4;
/// Largest roster two courts can hold
pub const MAX_ROSTER: usize = 8;

/// Number of sides across both courts
pub const GROUPS: usize = 4;

/// Side sizes in (court1.side1, court1.side2, court2.side1, court2.side2) order.
///
/// Singles are kept to a minimum and packed onto the second court so that
/// doubles play survives wherever the roster allows it.
const FORMAT_TABLE: [[usize; GROUPS]; MAX_ROSTER - MIN_ROSTER + 1] = [
    [1, 1, 1, 1], // 4
    [1, 2, 1, 1], // 5
    [2, 2, 1, 1], // 6
    [2, 2, 2, 1], // 7
    [2, 2, 2, 2], // 8
];

/// Layout of both courts for a given roster size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourtFormat {
    sizes: [usize; GROUPS],
}

impl CourtFormat {
    /// Resolve the format for `n` players
    pub fn for_roster(n: usize) -> Result<Self, CourtError> {
        if !(MIN_ROSTER..=MAX_ROSTER).contains(&n) {
            return Err(CourtError::UnsupportedRosterSize { size: n });
        }
        Ok(Self {
            sizes: FORMAT_TABLE[n - MIN_ROSTER],
        })
    }

    pub fn sizes(&self) -> [usize; GROUPS] {
        self.sizes
    }

    /// Total players placed by this format
    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Number of sides occupied by a single player
    pub fn singles(&self) -> usize {
        self.sizes.iter().filter(|&&s| s == 1).count()
    }

    /// Labels for both courts, e.g. ["2v2", "1v1"]
    pub fn court_labels(&self) -> [String; 2] {
        [
            format!("{}v{}", self.sizes[0], self.sizes[1]),
            format!("{}v{}", self.sizes[2], self.sizes[3]),
        ]
    }
}
