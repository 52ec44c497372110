//! Participants, sides, courts and rounds

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::CourtError;
use crate::pair::PairKey;

/// A player in the session. Identity is `id`; `name` is display only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One half of a court: a single player or a doubles pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Participant>", into = "Vec<Participant>")]
pub struct Side {
    players: Vec<Participant>,
}

impl Side {
    pub fn new(players: Vec<Participant>) -> Result<Self, CourtError> {
        match players.len() {
            1 | 2 => Ok(Self { players }),
            size => Err(CourtError::InvalidSideSize { size }),
        }
    }

    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Sides are never empty; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.players.len() == 1
    }

    /// Partner key for a doubles side, `None` for a single
    pub fn pair_key(&self) -> Option<PairKey> {
        match self.players.as_slice() {
            [a, b] => Some(PairKey::new(&a.id, &b.id)),
            _ => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

impl TryFrom<Vec<Participant>> for Side {
    type Error = CourtError;

    fn try_from(players: Vec<Participant>) -> Result<Self, Self::Error> {
        Side::new(players)
    }
}

impl From<Side> for Vec<Participant> {
    fn from(side: Side) -> Self {
        side.players
    }
}

/// A court with two opposing sides
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub side1: Side,
    pub side2: Side,
}

impl Court {
    pub fn new(side1: Side, side2: Side) -> Self {
        Self { side1, side2 }
    }

    /// Format label such as "2v2" or "1v2"
    pub fn label(&self) -> String {
        format!("{}v{}", self.side1.len(), self.side2.len())
    }

    pub fn sides(&self) -> [&Side; 2] {
        [&self.side1, &self.side2]
    }

    /// Every cross-court pairing (one player from each side)
    pub fn opponent_pairs(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.side1.players().iter().flat_map(move |a| {
            self.side2
                .players()
                .iter()
                .map(move |b| PairKey::new(&a.id, &b.id))
        })
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.side1.players().iter().chain(self.side2.players())
    }
}

/// One complete assignment of the roster across both courts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub court1: Court,
    pub court2: Court,
}

impl Round {
    pub fn new(court1: Court, court2: Court) -> Self {
        Self { court1, court2 }
    }

    /// Build a round from four groups in (court1.side1, court1.side2,
    /// court2.side1, court2.side2) order
    pub fn from_groups(groups: [Vec<Participant>; 4]) -> Result<Self, CourtError> {
        let [a, b, c, d] = groups;
        Ok(Self {
            court1: Court::new(Side::new(a)?, Side::new(b)?),
            court2: Court::new(Side::new(c)?, Side::new(d)?),
        })
    }

    pub fn courts(&self) -> [&Court; 2] {
        [&self.court1, &self.court2]
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.court1.participants().chain(self.court2.participants())
    }

    /// Ids of every player in the round
    pub fn player_ids(&self) -> BTreeSet<String> {
        self.participants().map(|p| p.id.clone()).collect()
    }

    /// Number of player slots (counts duplicates, unlike `player_ids`)
    pub fn player_count(&self) -> usize {
        self.participants().count()
    }

    /// Players sitting alone on a side
    pub fn singles(&self) -> impl Iterator<Item = &Participant> {
        self.courts()
            .into_iter()
            .flat_map(|c| c.sides())
            .filter(|s| s.is_single())
            .flat_map(|s| s.players())
    }

    /// Partner keys of every doubles side
    pub fn partner_pairs(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.courts()
            .into_iter()
            .flat_map(|c| c.sides())
            .filter_map(|s| s.pair_key())
    }
}
