//! Symmetric keys for unordered pairs of participants

use serde::{Deserialize, Serialize};

/// Unordered pair of participant ids, stored in sorted order.
///
/// `PairKey::new(a, b) == PairKey::new(b, a)` for every `a` and `b`,
/// including `a == b`. Being a structural tuple, no separator can
/// collide with characters inside an id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }

    /// Smaller id of the pair
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Larger id of the pair
    pub fn second(&self) -> &str {
        &self.1
    }

    /// Check if the pair involves the given id
    pub fn contains(&self, id: &str) -> bool {
        self.0 == id || self.1 == id
    }
}
