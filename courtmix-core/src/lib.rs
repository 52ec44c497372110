//! COURTMIX Core - Fair round generation for two-court sessions
//!
//! This crate provides the round-generation engine:
//! - Participants, sides, courts and rounds
//! - Symmetric pair keys for partner/opponent bookkeeping
//! - Match history (the fairness ledger)
//! - Court format lookup by roster size
//! - Exhaustive enumeration of court layouts
//! - Fairness scoring and best-round selection

pub mod error;
pub mod pair;
pub mod round;
pub mod format;
pub mod history;
pub mod enumerate;
pub mod score;
pub mod select;
pub mod report;

// Re-exports for convenient access
pub use error::CourtError;
pub use pair::PairKey;
pub use round::{Court, Participant, Round, Side};
pub use format::{CourtFormat, MAX_ROSTER, MIN_ROSTER};
pub use history::MatchHistory;
pub use enumerate::Assignments;
pub use score::{score, score_with, Weights};
pub use select::{generate_round, generate_round_from_entropy, Generator, Selection};
pub use report::{FairnessReport, PlayerLine};
