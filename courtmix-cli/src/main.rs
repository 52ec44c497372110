//! COURTMIX CLI - Command-line interface
//!
//! Commands:
//! - init: Create a session file from a roster
//! - next: Generate and record the next round
//! - reset: Clear a session's history
//! - report: Show how fairly a session has been spread
//! - simulate: Run a whole session in memory

mod display;
mod report_cmd;
mod round_cmd;
mod session;
mod simulate;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "courtmix")]
#[command(about = "Fair round generator for two-court sessions", version)]
struct Cli {
    /// Random seed for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a session file from a roster
    Init(round_cmd::InitArgs),
    /// Generate, record and print the next round
    Next(round_cmd::NextArgs),
    /// Clear the session history, keeping the roster
    Reset(round_cmd::ResetArgs),
    /// Show the fairness report for a session
    Report(report_cmd::ReportArgs),
    /// Simulate a whole session and report fairness
    Simulate(simulate::SimulateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init(args) => round_cmd::run_init(args),
        Commands::Next(args) => round_cmd::run_next(args, cli.seed),
        Commands::Reset(args) => round_cmd::run_reset(args),
        Commands::Report(args) => report_cmd::run(args),
        Commands::Simulate(args) => simulate::run(args, cli.seed),
    }
}

/// Log to stderr so stdout stays clean for --json output
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
