//! Outbound notification seam for milestone events.

use std::sync::Arc;

use crate::model::Milestone;

/// Receives milestone events published by a `ProgressModel`.
///
/// Publishing is fire-and-forget: implementations must not fail back into the
/// model, and delivery has to be complete by the time `publish` returns.
pub trait MilestoneSink: Send + Sync {
    fn publish(&self, milestone: Milestone);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MilestoneSink for NullSink {
    fn publish(&self, _milestone: Milestone) {}
}

impl<T: MilestoneSink + ?Sized> MilestoneSink for Arc<T> {
    fn publish(&self, milestone: Milestone) {
        (**self).publish(milestone);
    }
}
