//! Report command - fairness summary of a session

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use courtmix_core::FairnessReport;

use crate::display::format_report;
use crate::session::Session;

#[derive(Args)]
pub struct ReportArgs {
    /// Session file to summarise
    #[arg(long, value_name = "FILE", default_value = "session.json")]
    pub session: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the fairness report for a session
pub fn run(args: ReportArgs) -> Result<()> {
    let session = Session::load(&args.session)?;
    let report = FairnessReport::from_history(&session.history, &session.roster());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}
