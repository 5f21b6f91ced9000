//! Repeating tick timer
//!
//! Armed only while the game is playing, cancelled as soon as it is not.

use std::time::{Duration, Instant};

use crate::sim::GameState;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    /// Next deadline, `None` while disarmed
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Arm on entering Playing, cancel on leaving it
    pub fn sync(&mut self, state: GameState, now: Instant) {
        match state {
            GameState::Playing => {
                if self.next.is_none() {
                    self.next = Some(now + self.period);
                    log::debug!("tick timer started ({:?})", self.period);
                }
            }
            GameState::Menu | GameState::GameOver => self.cancel(),
        }
    }

    pub fn cancel(&mut self) {
        if self.next.take().is_some() {
            log::debug!("tick timer cancelled");
        }
    }

    /// How long until the next tick is due
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.next.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true once per elapsed deadline
    ///
    /// Periods missed entirely are skipped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let mut next = deadline + self.period;
        if next <= now {
            let behind = (now - deadline).as_nanos() / self.period.as_nanos();
            next = deadline + self.period * (behind as u32 + 1);
            log::debug!("tick timer skipped {behind} periods");
        }
        self.next = Some(next);
        true
    }
}
