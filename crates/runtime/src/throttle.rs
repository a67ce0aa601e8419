//! Rapid-input guard for scoring buttons.

use std::time::{Duration, Instant};

/// Drops inputs that arrive within `window` of the last accepted one.
///
/// A zero window accepts everything.
#[derive(Debug, Clone)]
pub struct InputThrottle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl InputThrottle {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `true` when the input should be processed.
    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        if self.window.is_zero() {
            return true;
        }

        let ready = self
            .last_accepted
            .is_none_or(|last| now.saturating_duration_since(last) >= self.window);
        if ready {
            self.last_accepted = Some(now);
        } else {
            tracing::trace!("Dropped input inside throttle window");
        }
        ready
    }

    /// Forgets the last accepted input.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for InputThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
