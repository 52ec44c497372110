//! Session commands - init, next, reset
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_init(), run_next(), run_reset() - orchestration
//! - Level 2: load/generate/record/save phases
//! - Level 3: play_next_round()
//! - Level 4: RNG and output utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use courtmix_core::{Generator, Round, Selection};

use crate::display::format_round;
use crate::session::{load_roster, Session};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct InitArgs {
    /// Roster JSON file (list of {"id", "name", "active"?})
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Session file to create
    #[arg(long, value_name = "FILE", default_value = "session.json")]
    pub session: PathBuf,
}

#[derive(Args)]
pub struct NextArgs {
    /// Session file to read and update
    #[arg(long, value_name = "FILE", default_value = "session.json")]
    pub session: PathBuf,

    /// Generate without recording the round
    #[arg(long)]
    pub dry_run: bool,

    /// Output the round as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Session file to reset
    #[arg(long, value_name = "FILE", default_value = "session.json")]
    pub session: PathBuf,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Create a session file from a roster
pub fn run_init(args: InitArgs) -> Result<()> {
    let players = load_roster(&args.roster)?;
    let session = Session::new(players)?;
    session.save(&args.session)?;

    tracing::info!(
        "Created session {} with {} players ({} active)",
        args.session.display(),
        session.players.len(),
        session.active_roster().len()
    );
    Ok(())
}

/// Generate, record and print the next round
pub fn run_next(args: NextArgs, seed: Option<u64>) -> Result<()> {
    let mut session = Session::load(&args.session)?;
    let mut rng = create_rng(seed);
    let number = session.history.rounds_played() + 1;

    let selection = play_next_round(&mut session, &Generator::default(), &mut rng, !args.dry_run)?;

    if !args.dry_run {
        session.save(&args.session)?;
    }

    report_round(&selection.round, number, args.json)?;
    Ok(())
}

/// Clear history, keep the roster
pub fn run_reset(args: ResetArgs) -> Result<()> {
    let mut session = Session::load(&args.session)?;
    let rounds = session.history.rounds_played();
    session.history.reset();
    session.save(&args.session)?;

    tracing::info!("Reset {} after {} rounds", args.session.display(), rounds);
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Pick the next round for the session's active players
///
/// The round is merged into the history only when `record` is set.
pub fn play_next_round(
    session: &mut Session,
    generator: &Generator,
    rng: &mut ChaCha8Rng,
    record: bool,
) -> Result<Selection> {
    let roster = session.active_roster();
    let selection = generator
        .select(&roster, &session.history, rng)
        .with_context(|| format!("Cannot generate a round for {} active players", roster.len()))?;

    tracing::info!(
        "Round {}: score {:.3} after {} candidates",
        session.history.rounds_played() + 1,
        selection.score,
        selection.examined
    );

    if record {
        session.history.record(&selection.round);
    }
    Ok(selection)
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn report_round(round: &Round, number: u32, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(round)?);
    } else {
        println!("=== Round {} ===", number);
        println!("{}", format_round(round));
    }
    Ok(())
}
