//! The player's current position, read by location-aware builders.

use std::sync::{Arc, PoisonError, RwLock};

use pgoapi_protocol::Coordinates;

use crate::SessionError;

/// Source of the player's current latitude and longitude (degrees).
///
/// Builders read it once per call, so moving the player while a batch is
/// being assembled changes the position seen by later entries.
pub trait LocationState: Send + Sync + 'static {
    fn current_latitude(&self) -> f64;
    fn current_longitude(&self) -> f64;

    /// Both values as one pair. Implementations backed by a lock should
    /// override this to read them atomically.
    fn current_coordinates(&self) -> (f64, f64) {
        (self.current_latitude(), self.current_longitude())
    }
}

impl<T: LocationState> LocationState for Arc<T> {
    fn current_latitude(&self) -> f64 {
        (**self).current_latitude()
    }

    fn current_longitude(&self) -> f64 {
        (**self).current_longitude()
    }

    fn current_coordinates(&self) -> (f64, f64) {
        (**self).current_coordinates()
    }
}

/// Lock-protected position shared between the movement code and batches.
#[derive(Debug, Default)]
pub struct SharedLocation {
    position: RwLock<Coordinates>,
}

impl SharedLocation {
    pub fn new(position: Coordinates) -> Self {
        Self {
            position: RwLock::new(position),
        }
    }

    /// Moves the player.
    ///
    /// # Errors
    /// [`SessionError::InvalidCoordinates`] for out-of-range or non-finite
    /// values (the stored position is left untouched), or
    /// [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn set(&self, latitude: f64, longitude: f64) -> Result<(), SessionError> {
        let position = Coordinates::new(latitude, longitude)
            .map_err(|_| SessionError::InvalidCoordinates { latitude, longitude })?;
        let mut slot = self
            .position
            .write()
            .map_err(|_| SessionError::Poisoned("location"))?;
        *slot = position;
        tracing::debug!(%position, "location updated");
        Ok(())
    }

    /// The stored position as one consistent snapshot.
    pub fn coordinates(&self) -> Coordinates {
        *self.position.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationState for SharedLocation {
    fn current_latitude(&self) -> f64 {
        self.coordinates().latitude()
    }

    fn current_longitude(&self) -> f64 {
        self.coordinates().longitude()
    }

    fn current_coordinates(&self) -> (f64, f64) {
        let position = self.coordinates();
        (position.latitude(), position.longitude())
    }
}
