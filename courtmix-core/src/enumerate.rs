//! Exhaustive enumeration of court layouts
//!
//! Splits a roster into four ordered groups of fixed sizes. Each group is
//! chosen as a k-combination of the players left over by the groups before
//! it, so every distinct split appears exactly once. Candidates are produced
//! lazily so the selector can stop as soon as it finds a perfect round.

use crate::format::GROUPS;
use crate::round::Participant;

/// Lexicographic k-combinations of `0..n`
#[derive(Clone, Debug)]
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Rightmost index that can still move up
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.exhausted = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// One level of the search: the players still available and the group
/// currently drawn from them
#[derive(Clone, Debug)]
struct Level {
    /// Roster indices available at this level
    pool: Vec<usize>,
    combos: Combinations,
    /// Positions within `pool` of the current group
    pick: Vec<usize>,
}

/// Iterator over every ordered split of a roster into four groups
///
/// Items are in (court1.side1, court1.side2, court2.side1, court2.side2)
/// order. Yields nothing when the sizes do not add up to the roster length.
#[derive(Clone, Debug)]
pub struct Assignments<'a> {
    roster: &'a [Participant],
    sizes: [usize; GROUPS],
    levels: Vec<Level>,
    exhausted: bool,
}

impl<'a> Assignments<'a> {
    pub fn new(roster: &'a [Participant], sizes: [usize; GROUPS]) -> Self {
        let mut assignments = Self {
            roster,
            sizes,
            levels: Vec::with_capacity(GROUPS),
            exhausted: sizes.iter().sum::<usize>() != roster.len(),
        };
        if !assignments.exhausted {
            assignments.exhausted = !assignments.fill_from(0, (0..roster.len()).collect());
        }
        assignments
    }

    /// Rebuild every level from `depth` down, each on its first combination
    fn fill_from(&mut self, depth: usize, mut pool: Vec<usize>) -> bool {
        let sizes = self.sizes;
        self.levels.truncate(depth);
        for &size in &sizes[depth..] {
            let mut combos = Combinations::new(pool.len(), size);
            let Some(pick) = combos.next() else {
                return false;
            };
            let rest = remaining(&pool, &pick);
            self.levels.push(Level { pool, combos, pick });
            pool = rest;
        }
        true
    }

    /// Step the deepest level that still has combinations left
    fn advance(&mut self) -> bool {
        for depth in (0..self.levels.len()).rev() {
            if let Some(pick) = self.levels[depth].combos.next() {
                let rest = remaining(&self.levels[depth].pool, &pick);
                self.levels[depth].pick = pick;
                return self.fill_from(depth + 1, rest);
            }
        }
        false
    }

    fn current(&self) -> [Vec<Participant>; GROUPS] {
        std::array::from_fn(|g| {
            let level = &self.levels[g];
            level
                .pick
                .iter()
                .map(|&i| self.roster[level.pool[i]].clone())
                .collect()
        })
    }
}

impl Iterator for Assignments<'_> {
    type Item = [Vec<Participant>; GROUPS];

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current();
        self.exhausted = !self.advance();
        Some(item)
    }
}

/// Pool entries not selected by `pick`
fn remaining(pool: &[usize], pick: &[usize]) -> Vec<usize> {
    pool.iter()
        .enumerate()
        .filter(|(i, _)| !pick.contains(i))
        .map(|(_, &p)| p)
        .collect()
}
