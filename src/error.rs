// Error types for itinerary reconstruction
use thiserror::Error;

/// Why a set of flight segments could not be turned into a single itinerary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("No initial flight found")]
    NoSourceFound,

    #[error("No final flight found")]
    NoSinkFound,

    #[error("Multiple final flights found: {codes:?}")]
    MultipleSinks { codes: Vec<String> },

    #[error("Disconnections detected between flights: {codes:?}")]
    Disconnected { codes: Vec<String> },

    #[error("A circular flight was found at airport: {code}")]
    CircularOrIsolated { code: String },

    // Classification guarantees a route exists, so this means the graph stages disagree.
    #[error("No path found from source to sink")]
    NoPathFound,

    #[error("Itinerary resolution did not complete: {0}")]
    TaskFailed(String),
}

impl ItineraryError {
    /// True for faults that indicate a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ItineraryError::NoPathFound | ItineraryError::TaskFailed(_)
        )
    }
}
