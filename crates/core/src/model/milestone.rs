use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed completion thresholds of the current goal.
///
/// Variants are declared in ascending threshold order, so the derived `Ord`
/// matches the order milestones are announced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// 25% of the goal.
    Quarter,
    /// 50% of the goal.
    Half,
    /// 75% of the goal.
    ThreeQuarters,
    /// The goal itself.
    GoalComplete,
}

impl Milestone {
    /// Every milestone, lowest threshold first.
    pub const ALL: [Milestone; 4] = [
        Milestone::Quarter,
        Milestone::Half,
        Milestone::ThreeQuarters,
        Milestone::GoalComplete,
    ];

    /// Fraction of the goal at which this milestone is reached.
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Milestone::Quarter => 0.25,
            Milestone::Half => 0.5,
            Milestone::ThreeQuarters => 0.75,
            Milestone::GoalComplete => 1.0,
        }
    }

    /// Milestones met at `fraction` of the goal, in ascending order.
    pub fn reached_at(fraction: f64) -> impl Iterator<Item = Milestone> {
        Self::ALL
            .into_iter()
            .filter(move |milestone| fraction >= milestone.threshold())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Milestone::Quarter => "25% of goal reached",
            Milestone::Half => "50% of goal reached",
            Milestone::ThreeQuarters => "75% of goal reached",
            Milestone::GoalComplete => "goal complete",
        };
        f.write_str(text)
    }
}
