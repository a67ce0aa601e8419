//! Device feedback hooks.
//!
//! Haptics and screen wake locks are device capabilities; platforms that
//! lack them plug in [`NoopFeedback`]. Every adapter call is best effort.

use thiserror::Error;

use crate::events::{Event, MatchEvent, Mutation};

/// Short tap after a scoring input, in milliseconds.
pub const SCORE_TAP: &[u64] = &[50];

/// Vibrate/pause pattern played when a side takes the match.
pub const MATCH_WON: &[u64] = &[200, 100, 200, 100, 200];

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback capability unavailable: {0}")]
    Unavailable(String),
}

/// Device capabilities used by the scoreboard screen.
pub trait FeedbackAdapter: Send + Sync {
    /// Plays a vibrate/pause pattern. Defaults to doing nothing.
    fn vibrate(&self, _pattern: &[u64]) {}

    /// Keeps the display on while the scoreboard is visible.
    fn request_wake_lock(&self) -> Result<(), FeedbackError> {
        Err(FeedbackError::Unavailable("wake lock".to_string()))
    }
}

/// Adapter for platforms without haptics or wake locks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFeedback;

impl FeedbackAdapter for NoopFeedback {}

/// Maps a published event to device feedback.
pub fn dispatch_feedback(adapter: &dyn FeedbackAdapter, event: &Event) {
    match event {
        Event::Display(display) => {
            if let Mutation::ScoreAdded { .. } = display.mutation {
                adapter.vibrate(SCORE_TAP);
            }
        }
        Event::Match(MatchEvent::MatchWon { .. }) => adapter.vibrate(MATCH_WON),
        Event::Match(MatchEvent::GameFinished { .. }) => {}
    }
}

/// Requests a wake lock, logging instead of failing when it is refused.
pub fn keep_screen_awake(adapter: &dyn FeedbackAdapter) -> bool {
    match adapter.request_wake_lock() {
        Ok(()) => true,
        Err(error) => {
            tracing::info!("Screen may sleep during the match: {}", error);
            false
        }
    }
}
