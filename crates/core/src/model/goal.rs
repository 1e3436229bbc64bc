use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::ProgressError;

/// Target step count for a tracking session.
///
/// A goal is always strictly positive; "no goal" is expressed as
/// `Option<Goal>::None` by the owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Goal(NonZeroU32);

impl Goal {
    /// Creates a new `Goal`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidGoal` if `steps` is zero.
    pub fn new(steps: u32) -> Result<Self, ProgressError> {
        NonZeroU32::new(steps)
            .map(Self)
            .ok_or(ProgressError::InvalidGoal)
    }

    /// Returns the target step count.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0.get()
    }

    /// Fraction of this goal covered by `steps` (1.0 means complete).
    #[must_use]
    pub fn fraction_complete(&self, steps: u32) -> f64 {
        f64::from(steps) / f64::from(self.value())
    }

    /// Returns true once `steps` meets or exceeds the goal.
    #[must_use]
    pub fn is_met_by(&self, steps: u32) -> bool {
        steps >= self.value()
    }
}

impl fmt::Debug for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Goal({})", self.0)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Goal {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s.trim().parse::<u32>().map_err(|_| ProgressError::ParseGoal {
            raw: s.to_string(),
        })?;
        Self::new(parsed).map_err(|_| ProgressError::ParseGoal { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_goal_is_rejected() {
        assert_eq!(Goal::new(0).unwrap_err(), ProgressError::InvalidGoal);
    }

    #[test]
    fn goal_from_str() {
        let goal: Goal = " 1000 ".parse().unwrap();
        assert_eq!(goal.value(), 1000);
        assert_eq!(goal.to_string(), "1000");
    }

    #[test]
    fn goal_from_str_invalid() {
        assert!(matches!(
            "0".parse::<Goal>(),
            Err(ProgressError::ParseGoal { .. })
        ));
        assert!(matches!(
            "-5".parse::<Goal>(),
            Err(ProgressError::ParseGoal { .. })
        ));
        assert!("lots".parse::<Goal>().is_err());
    }

    #[test]
    fn fraction_complete_scales_with_steps() {
        let goal = Goal::new(400).unwrap();
        assert_eq!(goal.fraction_complete(0), 0.0);
        assert_eq!(goal.fraction_complete(100), 0.25);
        assert_eq!(goal.fraction_complete(800), 2.0);
        assert!(!goal.is_met_by(399));
        assert!(goal.is_met_by(400));
    }
}
