//! Fairness report - read-only summary of a match history

use serde::Serialize;

use crate::history::MatchHistory;
use crate::round::Participant;

/// Per-player summary line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub id: String,
    pub name: String,
    /// Times played alone on a side
    pub singles: u32,
    /// Most recent round played alone
    pub last_single: Option<u32>,
    /// Distinct partners so far
    pub partners: usize,
    /// Distinct opponents so far
    pub opponents: usize,
}

/// Summary of how evenly a session has been spread
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FairnessReport {
    pub rounds_played: u32,
    pub players: Vec<PlayerLine>,
    /// Max minus min singles across the roster
    pub singles_spread: u32,
    /// Pairs that have partnered at least once
    pub distinct_partner_pairs: usize,
    /// Pairs that have partnered more than once
    pub repeated_partner_pairs: usize,
    /// Highest partner count of any pair
    pub max_partner_count: u32,
    /// Pairs that have faced each other more than once
    pub repeated_opponent_pairs: usize,
    /// Highest opponent count of any pair
    pub max_opponent_count: u32,
}

impl FairnessReport {
    /// Summarise `history` for the given roster.
    ///
    /// Roster members who never appear in the history count as zero, so
    /// the singles spread covers everyone, not just players seen so far.
    pub fn from_history(history: &MatchHistory, roster: &[Participant]) -> Self {
        let players: Vec<PlayerLine> = roster
            .iter()
            .map(|p| PlayerLine {
                id: p.id.clone(),
                name: p.name.clone(),
                singles: history.single_count(&p.id),
                last_single: history.last_single_round(&p.id),
                partners: history.partners().filter(|(k, _)| k.contains(&p.id)).count(),
                opponents: history.opponents().filter(|(k, _)| k.contains(&p.id)).count(),
            })
            .collect();

        let max_singles = players.iter().map(|l| l.singles).max().unwrap_or(0);
        let min_singles = players.iter().map(|l| l.singles).min().unwrap_or(0);

        Self {
            rounds_played: history.rounds_played(),
            singles_spread: max_singles - min_singles,
            distinct_partner_pairs: history.partners().count(),
            repeated_partner_pairs: history.partners().filter(|&(_, n)| n > 1).count(),
            max_partner_count: history.partners().map(|(_, n)| n).max().unwrap_or(0),
            repeated_opponent_pairs: history.opponents().filter(|&(_, n)| n > 1).count(),
            max_opponent_count: history.opponents().map(|(_, n)| n).max().unwrap_or(0),
            players,
        }
    }
}
