use chrono::{DateTime, Duration, Utc};

/// Source of timestamps for posted alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock UTC time.
    #[default]
    System,
    /// A frozen instant, moved only by `advance`.
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Steps a fixed clock forward; the system clock keeps its own time.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(at) = self {
            *at += delta;
        }
    }
}

/// Start of every replayed or tested session: 2023-11-14T22:13:20Z.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(1_700_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_now_is_stable() {
        assert_eq!(fixed_now().to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn system_clock_ignores_advance() {
        let mut clock = Clock::System;
        clock.advance(Duration::days(1));
        assert_eq!(clock, Clock::System);
    }
}
