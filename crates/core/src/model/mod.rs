mod goal;
mod milestone;
mod progress;
mod pursuer;

pub use goal::Goal;
pub use milestone::Milestone;
pub use progress::{ProgressModel, ProgressSnapshot};
pub use pursuer::Pursuer;
