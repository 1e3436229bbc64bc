use crate::error::{ProgressError, check_distance};

/// The simulated monster chasing the user.
///
/// Its distance is driven from outside the model; the model only compares it
/// against the user's own distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pursuer {
    distance: f64,
}

impl Pursuer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance covered so far, in metres.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Replaces the covered distance.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidDistance` for negative or non-finite values;
    /// the current distance is kept.
    pub fn set_distance(&mut self, distance: f64) -> Result<(), ProgressError> {
        self.distance = check_distance(distance)?;
        Ok(())
    }

    /// Moves the pursuer forward by `delta` metres and returns the new distance.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidDistance` if `delta` or the resulting
    /// distance is negative or non-finite.
    pub fn advance(&mut self, delta: f64) -> Result<f64, ProgressError> {
        check_distance(delta)?;
        self.distance = check_distance(self.distance + delta)?;
        Ok(self.distance)
    }

    pub fn reset(&mut self) {
        self.distance = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Pursuer::new().distance(), 0.0);
    }

    #[test]
    fn advance_accumulates() {
        let mut pursuer = Pursuer::new();
        assert_eq!(pursuer.advance(10.0).unwrap(), 10.0);
        assert_eq!(pursuer.advance(2.5).unwrap(), 12.5);
    }

    #[test]
    fn invalid_distance_keeps_previous_value() {
        let mut pursuer = Pursuer::new();
        pursuer.set_distance(30.0).unwrap();

        let err = pursuer.set_distance(-1.0).unwrap_err();
        assert!(matches!(err, ProgressError::InvalidDistance { .. }));
        assert!(pursuer.advance(f64::NAN).is_err());
        assert!(pursuer.advance(f64::INFINITY).is_err());
        assert_eq!(pursuer.distance(), 30.0);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut pursuer = Pursuer::new();
        pursuer.set_distance(50.0).unwrap();
        pursuer.reset();
        assert_eq!(pursuer, Pursuer::new());
    }
}
