//! Match history - the fairness ledger
//!
//! Counts how often each player has sat alone on a side and how often
//! each pair has partnered or opposed, plus the round in which that last
//! happened. Only [`MatchHistory::record`] mutates it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::pair::PairKey;
use crate::round::Round;

/// Cumulative fairness ledger for one session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    single_count: FxHashMap<String, u32>,
    #[serde(with = "pair_map")]
    partner_count: FxHashMap<PairKey, u32>,
    #[serde(with = "pair_map")]
    opponent_count: FxHashMap<PairKey, u32>,
    last_single_round: FxHashMap<String, u32>,
    #[serde(with = "pair_map")]
    last_partner_round: FxHashMap<PairKey, u32>,
    #[serde(with = "pair_map")]
    last_opponent_round: FxHashMap<PairKey, u32>,
    rounds_played: u32,
}

impl MatchHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a played round into the ledger.
    ///
    /// Every touched entry is stamped with the new 1-based round index,
    /// then `rounds_played` advances by one.
    pub fn record(&mut self, round: &Round) {
        let index = self.rounds_played + 1;

        for court in round.courts() {
            for side in court.sides() {
                match side.pair_key() {
                    Some(key) => {
                        *self.partner_count.entry(key.clone()).or_insert(0) += 1;
                        self.last_partner_round.insert(key, index);
                    }
                    None => {
                        for player in side.players() {
                            *self.single_count.entry(player.id.clone()).or_insert(0) += 1;
                            self.last_single_round.insert(player.id.clone(), index);
                        }
                    }
                }
            }

            for key in court.opponent_pairs() {
                *self.opponent_count.entry(key.clone()).or_insert(0) += 1;
                self.last_opponent_round.insert(key, index);
            }
        }

        self.rounds_played = index;
    }

    /// Forget everything; equivalent to starting a new session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_empty(&self) -> bool {
        self.rounds_played == 0
    }

    pub fn single_count(&self, id: &str) -> u32 {
        self.single_count.get(id).copied().unwrap_or(0)
    }

    pub fn partner_count(&self, key: &PairKey) -> u32 {
        self.partner_count.get(key).copied().unwrap_or(0)
    }

    pub fn opponent_count(&self, key: &PairKey) -> u32 {
        self.opponent_count.get(key).copied().unwrap_or(0)
    }

    pub fn last_single_round(&self, id: &str) -> Option<u32> {
        self.last_single_round.get(id).copied()
    }

    pub fn last_partner_round(&self, key: &PairKey) -> Option<u32> {
        self.last_partner_round.get(key).copied()
    }

    pub fn last_opponent_round(&self, key: &PairKey) -> Option<u32> {
        self.last_opponent_round.get(key).copied()
    }

    /// All recorded single counts
    pub fn singles(&self) -> impl Iterator<Item = (&str, u32)> {
        self.single_count.iter().map(|(id, &n)| (id.as_str(), n))
    }

    /// All recorded partner counts
    pub fn partners(&self) -> impl Iterator<Item = (&PairKey, u32)> {
        self.partner_count.iter().map(|(k, &n)| (k, n))
    }

    /// All recorded opponent counts
    pub fn opponents(&self) -> impl Iterator<Item = (&PairKey, u32)> {
        self.opponent_count.iter().map(|(k, &n)| (k, n))
    }
}

/// JSON object keys must be strings, so pair-keyed maps are stored as a
/// sorted list of `[pair, value]` entries.
mod pair_map {
    use rustc_hash::FxHashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::pair::PairKey;

    pub fn serialize<S: Serializer>(
        map: &FxHashMap<PairKey, u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&PairKey, &u32)> = map.iter().collect();
        entries.sort();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<FxHashMap<PairKey, u32>, D::Error> {
        let entries: Vec<(PairKey, u32)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
