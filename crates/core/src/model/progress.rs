use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alert::MilestoneSink;
use crate::error::{ProgressError, check_distance};
use crate::model::{Goal, Milestone, Pursuer};

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Plain-data view of a tracking session, useful for UI and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub goal: Option<u32>,
    pub steps: u32,
    pub distance: f64,
    pub pursuer_distance: f64,
    pub fraction_complete: Option<f64>,
    pub goal_reached: bool,
    pub caught: bool,
}

//
// ─── MODEL ─────────────────────────────────────────────────────────────────────
//

/// Step progress against a goal, with a pursuer chasing the user.
///
/// `goal_reached` and `caught` are derived on every read. Setting the step
/// count publishes any newly met milestones to the injected sink before
/// `set_steps` returns.
pub struct ProgressModel {
    goal: Option<Goal>,
    steps: u32,
    distance: f64,
    pursuer: Pursuer,
    // Highest milestone published since the last restart or goal change.
    announced: Option<Milestone>,
    sink: Arc<dyn MilestoneSink>,
}

impl ProgressModel {
    /// Creates a model with no goal, zero steps and a fresh pursuer.
    #[must_use]
    pub fn new(sink: Arc<dyn MilestoneSink>) -> Self {
        Self {
            goal: None,
            steps: 0,
            distance: 0.0,
            pursuer: Pursuer::new(),
            announced: None,
            sink,
        }
    }

    #[must_use]
    pub fn goal(&self) -> Option<Goal> {
        self.goal
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Distance the user has covered, in metres.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    pub fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    /// Replaces the goal. A different goal re-arms every milestone.
    pub fn set_goal(&mut self, goal: Option<Goal>) {
        if self.goal != goal {
            self.announced = None;
        }
        self.goal = goal;
    }

    /// Replaces the step count and publishes milestones it newly meets.
    pub fn set_steps(&mut self, steps: u32) {
        self.steps = steps;
        self.update_for_steps();
    }

    /// Replaces the user's covered distance.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidDistance` for negative or non-finite values;
    /// the current distance is kept.
    pub fn set_distance(&mut self, distance: f64) -> Result<(), ProgressError> {
        self.distance = check_distance(distance)?;
        Ok(())
    }

    /// True when a goal is set, the steps meet it, and the user is not caught.
    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.goal.is_some_and(|goal| goal.is_met_by(self.steps)) && !self.caught()
    }

    /// True once the user has moved and the pursuer has drawn level or passed.
    #[must_use]
    pub fn caught(&self) -> bool {
        self.distance > 0.0 && self.pursuer.distance() >= self.distance
    }

    /// Clears goal, steps, distance and pursuer for a new session.
    pub fn restart(&mut self) {
        self.goal = None;
        self.steps = 0;
        self.distance = 0.0;
        self.pursuer.reset();
        self.announced = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            goal: self.goal.map(|goal| goal.value()),
            steps: self.steps,
            distance: self.distance,
            pursuer_distance: self.pursuer.distance(),
            fraction_complete: self.goal.map(|goal| goal.fraction_complete(self.steps)),
            goal_reached: self.goal_reached(),
            caught: self.caught(),
        }
    }

    fn update_for_steps(&mut self) {
        let Some(goal) = self.goal else {
            return;
        };

        let fraction = goal.fraction_complete(self.steps);
        for milestone in Milestone::reached_at(fraction) {
            if Some(milestone) <= self.announced {
                continue;
            }
            debug!(%milestone, steps = self.steps, goal = goal.value(), "milestone reached");
            self.sink.publish(milestone);
            self.announced = Some(milestone);
        }
    }
}

impl fmt::Debug for ProgressModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressModel")
            .field("goal", &self.goal)
            .field("steps", &self.steps)
            .field("distance", &self.distance)
            .field("pursuer", &self.pursuer)
            .field("announced", &self.announced)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
