//! Error types for the session layer.

/// Errors raised while updating auth or location state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The player was moved to a position outside the valid range.
    #[error("invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A writer panicked while holding the state lock.
    ///
    /// Readers recover the last written value; writers refuse to build on
    /// state that may be half-updated.
    #[error("{0} state lock poisoned")]
    Poisoned(&'static str),
}
