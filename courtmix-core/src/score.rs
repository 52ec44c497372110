//! Fairness scoring of candidate rounds
//!
//! Lower is better; 0 means nothing in the round repeats anything the
//! history has seen. Three tiers are weighted so that one extra repeat at a
//! higher tier outweighs what the lower tiers normally add up to:
//! sitting alone > partnering again > facing again.
//!
//! Each term also carries a recency fraction in `[0, 1)`. It only breaks
//! ties between equally repeated players or pairs, preferring the one used
//! least recently, which makes players and pairs rotate first-in first-out.

use serde::{Deserialize, Serialize};

use crate::history::MatchHistory;
use crate::round::Round;

/// Default penalty per previous time alone on a side
pub const SINGLE_WEIGHT: f64 = 1000.0;
/// Default penalty per previous partnership
pub const PARTNER_WEIGHT: f64 = 100.0;
/// Default penalty per previous opposition
pub const OPPONENT_WEIGHT: f64 = 10.0;

/// Tier weights for the fairness score
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight for repeated singles
    pub single: f64,
    /// Weight for repeated partner pairs
    pub partner: f64,
    /// Weight for repeated opponent pairs
    pub opponent: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            single: SINGLE_WEIGHT,
            partner: PARTNER_WEIGHT,
            opponent: OPPONENT_WEIGHT,
        }
    }
}

impl Weights {
    pub fn with_single(mut self, single: f64) -> Self {
        self.single = single;
        self
    }

    pub fn with_partner(mut self, partner: f64) -> Self {
        self.partner = partner;
        self
    }

    pub fn with_opponent(mut self, opponent: f64) -> Self {
        self.opponent = opponent;
        self
    }
}

/// Score a round against history with the default weights
pub fn score(history: &MatchHistory, round: &Round) -> f64 {
    score_with(history, round, &Weights::default())
}

/// Score a round against history with custom weights
pub fn score_with(history: &MatchHistory, round: &Round, weights: &Weights) -> f64 {
    let rounds_played = history.rounds_played();
    let mut total = 0.0;

    for court in round.courts() {
        for side in court.sides() {
            match side.pair_key() {
                Some(key) => {
                    total += weights.partner * history.partner_count(&key) as f64
                        + recency(history.last_partner_round(&key), rounds_played);
                }
                None => {
                    for player in side.players() {
                        total += weights.single * history.single_count(&player.id) as f64
                            + recency(history.last_single_round(&player.id), rounds_played);
                    }
                }
            }
        }

        for key in court.opponent_pairs() {
            total += weights.opponent * history.opponent_count(&key) as f64
                + recency(history.last_opponent_round(&key), rounds_played);
        }
    }

    total
}

/// Fraction in [0, 1): 0 for never, approaching 1 for the latest round
fn recency(last_round: Option<u32>, rounds_played: u32) -> f64 {
    last_round.unwrap_or(0) as f64 / (rounds_played as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Participant;

    fn p(id: &str) -> Participant {
        Participant::new(id, id)
    }

    fn round_of(groups: [&[&str]; 4]) -> Round {
        Round::from_groups(groups.map(|g| g.iter().map(|id| p(id)).collect::<Vec<_>>())).unwrap()
    }

    #[test]
    fn test_empty_history_scores_zero() {
        let history = MatchHistory::new();
        assert_eq!(score(&history, &round_of([&["a"], &["b"], &["c"], &["d"]])), 0.0);
        assert_eq!(
            score(&history, &round_of([&["a", "b"], &["c", "d"], &["e", "f"], &["g", "h"]])),
            0.0
        );
    }

    #[test]
    fn test_recency_bounds() {
        assert_eq!(recency(None, 5), 0.0);
        assert!(recency(Some(5), 5) < 1.0);
        assert!(recency(Some(1), 5) < recency(Some(4), 5));
    }

    #[test]
    fn test_single_penalty() {
        let mut history = MatchHistory::new();
        history.record(&round_of([&["a", "b"], &["c", "d"], &["e"], &["f"]]));

        // e alone again, with one repeated opposition (b vs c)
        let e_alone = round_of([&["a", "c"], &["b", "f"], &["e"], &["d"]]);
        // nobody repeats a single; only e vs f repeats
        let fresh = round_of([&["a", "e"], &["b", "f"], &["c"], &["d"]]);

        assert!(score(&history, &e_alone) >= SINGLE_WEIGHT);
        assert!(score(&history, &e_alone) - score(&history, &fresh) >= SINGLE_WEIGHT);
    }

    #[test]
    fn test_tier_penalties() {
        // One prior single for a, nothing else shared with the candidate
        let mut singles = MatchHistory::new();
        singles.record(&round_of([&["a"], &["e", "f"], &["g"], &["h"]]));
        let single_cost = score(&singles, &round_of([&["a"], &["b"], &["c"], &["d"]]));

        // One prior partnership of a and b
        let mut partners = MatchHistory::new();
        partners.record(&round_of([&["a", "b"], &["c"], &["d"], &["e"]]));
        let partner_cost = score(&partners, &round_of([&["a", "b"], &["f"], &["g"], &["h"]]));

        // One prior opposition of a and b
        let mut opponents = MatchHistory::new();
        opponents.record(&round_of([&["a"], &["b"], &["c"], &["d"]]));
        let opponent_cost = score(&opponents, &round_of([&["a", "e"], &["b", "f"], &["g"], &["h"]]));

        // Each is one repeat plus a recency of 1/2
        assert_eq!(single_cost, SINGLE_WEIGHT + 0.5);
        assert_eq!(partner_cost, PARTNER_WEIGHT + 0.5);
        assert_eq!(opponent_cost, OPPONENT_WEIGHT + 0.5);

        assert!(single_cost > partner_cost);
        assert!(partner_cost > opponent_cost);
    }

    #[test]
    fn test_older_single_scores_lower() {
        // a and b have each sat alone once; a longer ago than b
        let mut history = MatchHistory::new();
        history.record(&round_of([&["a"], &["c", "d"], &["e", "f"], &["g", "h"]]));
        history.record(&round_of([&["b"], &["c", "e"], &["d", "g"], &["f", "h"]]));
        assert_eq!(history.single_count("a"), history.single_count("b"));

        // Identical apart from who sits alone; everyone else is new
        let a_alone = round_of([&["b", "w"], &["y", "z"], &["a"], &["x"]]);
        let b_alone = round_of([&["a", "w"], &["y", "z"], &["b"], &["x"]]);
        let a_cost = score(&history, &a_alone);
        let b_cost = score(&history, &b_alone);
        assert!(a_cost < b_cost, "a={} b={}", a_cost, b_cost);
        assert!(b_cost - a_cost < 1.0);
    }

    #[test]
    fn test_custom_weights() {
        let mut history = MatchHistory::new();
        let round = round_of([&["a"], &["b"], &["c"], &["d"]]);
        history.record(&round);

        let weights = Weights::default().with_single(1.0).with_opponent(0.0);
        let cost = score_with(&history, &round, &weights);
        // four singles at weight 1, plus recency 1/2 for each single and opponent pair
        assert_eq!(cost, 4.0 + 6.0 * 0.5);
    }
}
