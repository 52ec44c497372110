//! Session file - roster plus match history, persisted as JSON
//!
//! The engine never stores anything; this module is the collaborator that
//! keeps a session alive between invocations.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use courtmix_core::{MatchHistory, Participant};

/// Roster entry with an availability flag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub participant: Participant,
    /// Inactive players are skipped when generating rounds
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Everything the CLI needs to continue a session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub players: Vec<RosterEntry>,
    #[serde(default)]
    pub history: MatchHistory,
}

impl Session {
    /// Start a fresh session for a roster
    pub fn new(players: Vec<RosterEntry>) -> Result<Self> {
        check_ids(&players)?;
        Ok(Self {
            players,
            history: MatchHistory::new(),
        })
    }

    /// Load a session file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session: {}", path.display()))?;
        let session: Session = serde_json::from_str(&content)
            .with_context(|| format!("Invalid session file: {}", path.display()))?;
        check_ids(&session.players)?;
        Ok(session)
    }

    /// Write the session file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write session: {}", path.display()))?;
        Ok(())
    }

    /// Players eligible for the next round, in roster order
    pub fn active_roster(&self) -> Vec<Participant> {
        self.players
            .iter()
            .filter(|e| e.active)
            .map(|e| e.participant.clone())
            .collect()
    }

    /// Every player, active or not
    pub fn roster(&self) -> Vec<Participant> {
        self.players.iter().map(|e| e.participant.clone()).collect()
    }
}

/// Parse a roster file: a flat list of players or `{"players": [...]}`
pub fn parse_roster(content: &str) -> Result<Vec<RosterEntry>> {
    if let Ok(players) = serde_json::from_str::<Vec<RosterEntry>>(content) {
        return Ok(players);
    }

    #[derive(Deserialize)]
    struct Wrapped {
        players: Vec<RosterEntry>,
    }

    let wrapped: Wrapped =
        serde_json::from_str(content).context("Roster must be a list of players or {\"players\": [...]}")?;
    Ok(wrapped.players)
}

/// Load a roster file from disk
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster: {}", path.display()))?;
    parse_roster(&content).with_context(|| format!("Invalid roster: {}", path.display()))
}

fn check_ids(players: &[RosterEntry]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for entry in players {
        if entry.participant.id.is_empty() {
            bail!("Player '{}' has an empty id", entry.participant.name);
        }
        if !seen.insert(entry.participant.id.as_str()) {
            bail!("Duplicate player id: {}", entry.participant.id);
        }
    }
    Ok(())
}
