//! In-process fan-out of milestone alerts.
//!
//! `AlertCenter` is owned and injected by the app; nothing here is global.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use fitness_core::{Milestone, MilestoneSink};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Clock;

/// A milestone alert as it was posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub milestone: Milestone,
    pub posted_at: DateTime<Utc>,
}

/// Receives every alert posted to an `AlertCenter` while subscribed.
pub trait AlertListener: Send + Sync {
    fn on_alert(&self, alert: &AlertRecord);
}

impl<F> AlertListener for F
where
    F: Fn(&AlertRecord) + Send + Sync,
{
    fn on_alert(&self, alert: &AlertRecord) {
        self(alert);
    }
}

/// Handle returned by `AlertCenter::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

struct State {
    clock: Clock,
    next_id: u64,
    listeners: Vec<(ListenerId, Arc<dyn AlertListener>)>,
    history: Vec<AlertRecord>,
}

/// Synchronous alert hub with a posting history.
pub struct AlertCenter {
    state: Mutex<State>,
}

impl AlertCenter {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: Mutex::new(State {
                clock,
                next_id: 0,
                listeners: Vec::new(),
                history: Vec::new(),
            }),
        }
    }

    /// Moves a fixed clock forward so later alerts carry later timestamps.
    pub fn advance_clock(&self, delta: Duration) {
        self.lock().clock.advance(delta);
    }

    /// Registers a listener; it sees alerts posted from now on.
    pub fn subscribe(&self, listener: Arc<dyn AlertListener>) -> ListenerId {
        let mut state = self.lock();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.listeners.push((id, listener));
        debug!(listener = id.value(), "alert listener subscribed");
        id
    }

    /// Removes a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut state = self.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Records the alert and delivers it to every listener, in subscription order.
    pub fn post_alert(&self, milestone: Milestone) {
        // Listeners run without the lock held so they may post or subscribe.
        let (record, listeners) = {
            let mut state = self.lock();
            let record = AlertRecord {
                milestone,
                posted_at: state.clock.now(),
            };
            state.history.push(record.clone());
            let listeners: Vec<Arc<dyn AlertListener>> = state
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (record, listeners)
        };

        info!(%milestone, listeners = listeners.len(), "alert posted");
        for listener in listeners {
            listener.on_alert(&record);
        }
    }

    /// Alerts posted so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<AlertRecord> {
        self.lock().history.clone()
    }

    pub fn clear_alerts(&self) {
        self.lock().history.clear();
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for AlertCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("AlertCenter")
            .field("clock", &state.clock)
            .field("listeners", &state.listeners.len())
            .field("history", &state.history)
            .finish()
    }
}

impl MilestoneSink for AlertCenter {
    fn publish(&self, milestone: Milestone) {
        self.post_alert(milestone);
    }
}
