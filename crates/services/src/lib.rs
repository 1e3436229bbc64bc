#![forbid(unsafe_code)]

pub mod alert_center;
pub mod clock;

pub use alert_center::{AlertCenter, AlertListener, AlertRecord, ListenerId};
pub use clock::Clock;
