use fitness_core::{Goal, ProgressError, ProgressModel, ProgressSnapshot};
use tracing::{debug, warn};

/// A scripted session: cumulative step samples plus how far each one moves
/// the user and the pursuer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayPlan {
    pub goal: Option<Goal>,
    pub samples: Vec<u32>,
    pub stride: f64,
    pub pursuer_pace: f64,
}

impl ReplayPlan {
    /// Checks per-sample distances before anything touches the model.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidDistance` for a negative or non-finite
    /// stride or pace.
    pub fn validate(&self) -> Result<(), ProgressError> {
        for value in [self.stride, self.pursuer_pace] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProgressError::InvalidDistance { value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub samples_applied: usize,
    pub snapshot: ProgressSnapshot,
}

/// Restarts `model` and feeds it every sample, stopping once the user is caught.
///
/// # Errors
///
/// Returns `ProgressError::InvalidDistance` if the stride or pace produce an
/// invalid distance. A plan rejected by `ReplayPlan::validate` leaves the model
/// untouched; distances are applied before steps so a failing sample never
/// publishes milestones.
pub fn replay(model: &mut ProgressModel, plan: &ReplayPlan) -> Result<ReplayOutcome, ProgressError> {
    plan.validate()?;
    model.restart();
    model.set_goal(plan.goal);

    let mut samples_applied = 0;
    for &steps in &plan.samples {
        model.set_distance(f64::from(steps) * plan.stride)?;
        let pursuer = model.pursuer_mut().advance(plan.pursuer_pace)?;
        model.set_steps(steps);
        samples_applied += 1;

        debug!(steps, distance = model.distance(), pursuer, "sample applied");
        if model.caught() {
            warn!(steps, pursuer, "caught by the monster");
            break;
        }
    }

    Ok(ReplayOutcome {
        samples_applied,
        snapshot: model.snapshot(),
    })
}
