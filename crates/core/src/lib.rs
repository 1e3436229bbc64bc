#![forbid(unsafe_code)]

pub mod alert;
pub mod error;
pub mod model;

pub use alert::{MilestoneSink, NullSink};
pub use error::ProgressError;
pub use model::{Goal, Milestone, ProgressModel, ProgressSnapshot, Pursuer};
