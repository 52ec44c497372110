//! Round selection - exhaustive search for the fairest round
//!
//! The roster is shuffled once per call, then every layout is scored and
//! the cheapest kept (first seen wins ties). A zero score cannot be beaten,
//! so the search stops there. The shuffle keeps equally fair layouts from
//! always coming out in the same order, which matters most on the first
//! round when every candidate scores 0.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::enumerate::Assignments;
use crate::error::CourtError;
use crate::format::CourtFormat;
use crate::history::MatchHistory;
use crate::round::{Participant, Round};
use crate::score::{score_with, Weights};

/// Outcome of a search
#[derive(Clone, Debug)]
pub struct Selection {
    /// The chosen round
    pub round: Round,
    /// Its fairness score
    pub score: f64,
    /// Candidates scored before the search ended
    pub examined: usize,
}

/// Round generator with configurable scoring weights
#[derive(Clone, Debug, Default)]
pub struct Generator {
    weights: Weights,
}

impl Generator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Find the fairest round for `roster` given `history`
    ///
    /// # Errors
    /// * `UnsupportedRosterSize` if the roster is not 4 to 8 players
    /// * `DuplicateParticipant` if an id appears twice
    /// * `GenerationFailed` if no candidate was produced
    pub fn select<R: Rng + ?Sized>(
        &self,
        roster: &[Participant],
        history: &MatchHistory,
        rng: &mut R,
    ) -> Result<Selection, CourtError> {
        let format = CourtFormat::for_roster(roster.len())?;
        check_unique(roster)?;

        let mut order = roster.to_vec();
        order.shuffle(rng);

        let mut best: Option<(Round, f64)> = None;
        let mut examined = 0;

        for groups in Assignments::new(&order, format.sizes()) {
            examined += 1;
            let round = Round::from_groups(groups)?;
            let cost = score_with(history, &round, &self.weights);

            if best.as_ref().map_or(true, |(_, lowest)| cost < *lowest) {
                best = Some((round, cost));
            }
            if cost == 0.0 {
                break;
            }
        }

        let (round, score) = best.ok_or(CourtError::GenerationFailed { size: roster.len() })?;
        tracing::debug!(players = roster.len(), examined, score, "selected round");

        Ok(Selection {
            round,
            score,
            examined,
        })
    }
}

/// Generate the fairest next round with default weights
pub fn generate_round<R: Rng + ?Sized>(
    roster: &[Participant],
    history: &MatchHistory,
    rng: &mut R,
) -> Result<Round, CourtError> {
    Generator::default()
        .select(roster, history, rng)
        .map(|selection| selection.round)
}

/// Generate a round using the thread-local RNG
pub fn generate_round_from_entropy(
    roster: &[Participant],
    history: &MatchHistory,
) -> Result<Round, CourtError> {
    generate_round(roster, history, &mut rand::thread_rng())
}

fn check_unique(roster: &[Participant]) -> Result<(), CourtError> {
    let mut seen = FxHashSet::default();
    for player in roster {
        if !seen.insert(player.id.as_str()) {
            return Err(CourtError::DuplicateParticipant {
                id: player.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{MAX_ROSTER, MIN_ROSTER};
    use crate::pair::PairKey;
    use crate::score::score;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant::new(format!("p{}", i), format!("Player {}", i)))
            .collect()
    }

    fn ids(players: &[Participant]) -> BTreeSet<String> {
        players.iter().map(|p| p.id.clone()).collect()
    }

    fn layout(round: &Round) -> Vec<Vec<Vec<String>>> {
        let mut courts: Vec<Vec<Vec<String>>> = round
            .courts()
            .iter()
            .map(|court| {
                let mut sides: Vec<Vec<String>> = court
                    .sides()
                    .iter()
                    .map(|side| {
                        let mut ids: Vec<String> =
                            side.players().iter().map(|p| p.id.clone()).collect();
                        ids.sort();
                        ids
                    })
                    .collect();
                sides.sort();
                sides
            })
            .collect();
        courts.sort();
        courts
    }

    #[test]
    fn test_every_player_placed_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in MIN_ROSTER..=MAX_ROSTER {
            let players = roster(n);
            let round = generate_round(&players, &MatchHistory::new(), &mut rng).unwrap();
            assert_eq!(round.player_ids(), ids(&players));
            assert_eq!(round.player_count(), n);
        }
    }

    #[test]
    fn test_unsupported_roster_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for n in [0, 3, 9] {
            let err = generate_round(&roster(n), &MatchHistory::new(), &mut rng).unwrap_err();
            assert_eq!(err, CourtError::UnsupportedRosterSize { size: n });
        }
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut players = roster(4);
        players.push(Participant::new("p2", "Imposter"));
        let err = generate_round(&players, &MatchHistory::new(), &mut rng).unwrap_err();
        assert_eq!(err, CourtError::DuplicateParticipant { id: "p2".to_string() });
    }

    #[test]
    fn test_empty_history_stops_at_first_candidate() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let selection = Generator::default()
            .select(&roster(8), &MatchHistory::new(), &mut rng)
            .unwrap();
        assert_eq!(selection.score, 0.0);
        assert_eq!(selection.examined, 1);
    }

    #[test]
    fn test_same_seed_same_round() {
        let players = roster(6);
        let history = MatchHistory::new();
        let a = generate_round(&players, &history, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let b = generate_round(&players, &history, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_varies_first_round() {
        let players = roster(8);
        let history = MatchHistory::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let layouts: BTreeSet<_> = (0..20)
            .map(|_| layout(&generate_round(&players, &history, &mut rng).unwrap()))
            .collect();
        assert!(layouts.len() > 1, "first rounds should not all be identical");
    }

    #[test]
    fn test_four_player_scenario() {
        let players: Vec<Participant> = ["A", "B", "C", "D"]
            .iter()
            .map(|id| Participant::new(*id, *id))
            .collect();
        let mut history = MatchHistory::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        let first = generate_round(&players, &history, &mut rng).unwrap();
        assert_eq!(first.court1.label(), "1v1");
        assert_eq!(first.court2.label(), "1v1");
        assert_eq!(first.player_ids(), ids(&players));
        assert_eq!(score(&history, &first), 0.0);

        history.record(&first);
        let second = generate_round(&players, &history, &mut rng).unwrap();
        assert!(score(&history, &second) > 0.0);
        assert_ne!(layout(&first), layout(&second));

        // Everyone has sat alone once, so the winner avoids repeat opponents
        for court in second.courts() {
            for key in court.opponent_pairs() {
                assert_eq!(history.opponent_count(&key), 0);
            }
        }
    }

    #[test]
    fn test_partner_pairs_rotate_fifo() {
        let players = roster(8);
        let mut history = MatchHistory::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut rounds = Vec::new();

        for _ in 0..8 {
            let round = generate_round(&players, &history, &mut rng).unwrap();
            history.record(&round);
            rounds.push(round);
        }

        let pairs_of = |round: &Round| -> BTreeSet<PairKey> { round.partner_pairs().collect() };
        let mut all_pairs = BTreeSet::new();
        for round in &rounds[..7] {
            for key in round.partner_pairs() {
                assert!(all_pairs.insert(key.clone()), "pair {:?} repeated", key);
            }
        }
        assert_eq!(all_pairs.len(), 28);
        assert_eq!(pairs_of(&rounds[7]), pairs_of(&rounds[0]));
    }

    #[test]
    fn test_singles_spread_stays_within_one() {
        let players = roster(7);
        let mut history = MatchHistory::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for round_number in 1..=14 {
            let round = generate_round(&players, &history, &mut rng).unwrap();
            history.record(&round);

            if round_number == 7 || round_number == 14 {
                let counts: Vec<u32> = players.iter().map(|p| history.single_count(&p.id)).collect();
                let max = counts.iter().max().copied().unwrap_or(0);
                let min = counts.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1, "spread {:?} after {} rounds", counts, round_number);
            }
        }
    }

    #[test]
    fn test_entropy_generation() {
        let players = roster(5);
        let round = generate_round_from_entropy(&players, &MatchHistory::new()).unwrap();
        assert_eq!(round.player_ids(), ids(&players));
    }

    #[test]
    fn test_custom_weights_flow_through() {
        let generator = Generator::new(Weights::default().with_opponent(0.0));
        assert_eq!(generator.weights().opponent, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let selection = generator
            .select(&roster(5), &MatchHistory::new(), &mut rng)
            .unwrap();
        assert_eq!(selection.round.player_count(), 5);
    }
}
