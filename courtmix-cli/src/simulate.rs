//! Simulate command - run a whole session in memory and report fairness
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: simulate_session()
//! - Level 3: synthetic roster
//! - Level 4: configuration

use anyhow::{bail, Result};
use clap::Args;

use courtmix_core::{FairnessReport, Generator, Participant, Weights, MAX_ROSTER, MIN_ROSTER};

use crate::display::{format_report, format_round};
use crate::round_cmd::{create_rng, play_next_round};
use crate::session::{RosterEntry, Session};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of players (4-8)
    #[arg(long, default_value = "8")]
    pub players: usize,

    /// Rounds to play
    #[arg(long, default_value = "7")]
    pub rounds: u32,

    /// Penalty per repeated single
    #[arg(long, default_value = "1000")]
    pub single_weight: f64,

    /// Penalty per repeated partnership
    #[arg(long, default_value = "100")]
    pub partner_weight: f64,

    /// Penalty per repeated opposition
    #[arg(long, default_value = "10")]
    pub opponent_weight: f64,

    /// Print every generated round
    #[arg(long)]
    pub show_rounds: bool,

    /// Output the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl SimulateArgs {
    fn weights(&self) -> Weights {
        Weights::default()
            .with_single(self.single_weight)
            .with_partner(self.partner_weight)
            .with_opponent(self.opponent_weight)
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    if !(MIN_ROSTER..=MAX_ROSTER).contains(&args.players) {
        bail!(
            "--players must be between {} and {}, got {}",
            MIN_ROSTER,
            MAX_ROSTER,
            args.players
        );
    }

    tracing::info!(
        "Simulating {} rounds with {} players",
        args.rounds,
        args.players
    );

    let report = simulate_session(&args, seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play `args.rounds` rounds against a fresh history
pub fn simulate_session(args: &SimulateArgs, seed: Option<u64>) -> Result<FairnessReport> {
    let mut session = Session::new(synthetic_roster(args.players))?;
    let generator = Generator::new(args.weights());
    let mut rng = create_rng(seed);

    for number in 1..=args.rounds {
        let selection = play_next_round(&mut session, &generator, &mut rng, true)?;
        if args.show_rounds {
            println!("=== Round {} (score {:.3}) ===", number, selection.score);
            println!("{}\n", format_round(&selection.round));
        }
    }

    Ok(FairnessReport::from_history(&session.history, &session.roster()))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Players named "Player 1".."Player n"
fn synthetic_roster(n: usize) -> Vec<RosterEntry> {
    (1..=n)
        .map(|i| RosterEntry {
            participant: Participant::new(format!("p{}", i), format!("Player {}", i)),
            active: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(players: usize, rounds: u32) -> SimulateArgs {
        SimulateArgs {
            players,
            rounds,
            single_weight: 1000.0,
            partner_weight: 100.0,
            opponent_weight: 10.0,
            show_rounds: false,
            json: false,
        }
    }

    #[test]
    fn test_eight_players_use_every_pair_once() {
        let report = simulate_session(&args(8, 7), Some(21)).unwrap();
        assert_eq!(report.rounds_played, 7);
        assert_eq!(report.distinct_partner_pairs, 28);
        assert_eq!(report.repeated_partner_pairs, 0);
        assert_eq!(report.singles_spread, 0);
    }

    #[test]
    fn test_seven_players_share_singles() {
        let report = simulate_session(&args(7, 14), Some(21)).unwrap();
        assert!(report.singles_spread <= 1);
        assert_eq!(report.players.iter().map(|l| l.singles).sum::<u32>(), 14);
    }

    #[test]
    fn test_weights_from_args() {
        let w = args(6, 1).weights();
        assert_eq!(w, Weights::default());
    }
}
