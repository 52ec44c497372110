//! Error types for round generation

/// Errors raised by the round-generation engine
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CourtError {
    #[error("Unsupported roster size {size}: need between 4 and 8 players")]
    UnsupportedRosterSize { size: usize },

    /// Enumeration produced nothing for an accepted roster size.
    /// Indicates a resolver/enumerator mismatch, never a user error.
    #[error("No candidate rounds generated for {size} players")]
    GenerationFailed { size: usize },

    #[error("Participant '{id}' appears more than once in the roster")]
    DuplicateParticipant { id: String },

    #[error("Invalid side size {size}: a side holds 1 or 2 players")]
    InvalidSideSize { size: usize },
}
