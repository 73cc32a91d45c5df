use std::time::Duration;

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::app_time::AppInstant;

/// Colour state of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

/// Message plus tone shown at the bottom of the window.
///
/// A toned message falls back to `Neutral` after `tone_duration`. Each update
/// replaces the pending fallback, so an older deadline can never repaint a
/// newer message.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    tone: StatusTone,
    revert_at: Option<AppInstant>,
    tone_duration: Duration,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(UI_CONFIG.status_tone_duration)
    }
}

impl StatusLine {
    pub fn new(tone_duration: Duration) -> Self {
        Self {
            message: UI_TEXT.status_ready.to_string(),
            tone: StatusTone::Neutral,
            revert_at: None,
            tone_duration,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tone(&self) -> StatusTone {
        self.tone
    }

    pub fn set(&mut self, message: impl Into<String>, tone: StatusTone, now: AppInstant) {
        self.message = message.into();
        self.tone = tone;
        self.revert_at = match tone {
            StatusTone::Neutral => None,
            StatusTone::Positive | StatusTone::Negative => Some(now + self.tone_duration),
        };
    }

    /// Applies the pending fallback once its deadline has passed.
    pub fn tick(&mut self, now: AppInstant) {
        if let Some(deadline) = self.revert_at {
            if now >= deadline {
                self.tone = StatusTone::Neutral;
                self.revert_at = None;
            }
        }
    }

    /// Time left before the tone falls back, for scheduling a repaint.
    pub fn time_until_revert(&self, now: AppInstant) -> Option<Duration> {
        self.revert_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    #[test]
    fn tone_reverts_after_the_configured_delay() {
        let start = now();
        let mut status = StatusLine::new(Duration::from_secs(3));
        status.set("Model trained successfully!", StatusTone::Positive, start);

        status.tick(start + Duration::from_millis(2999));
        assert_eq!(status.tone(), StatusTone::Positive);

        status.tick(start + Duration::from_secs(3));
        assert_eq!(status.tone(), StatusTone::Neutral);
        assert_eq!(status.message(), "Model trained successfully!");
        assert_eq!(status.time_until_revert(start + Duration::from_secs(4)), None);
    }

    #[test]
    fn later_update_is_not_cleared_by_an_earlier_deadline() {
        let start = now();
        let mut status = StatusLine::new(Duration::from_secs(3));
        status.set("first", StatusTone::Positive, start);
        status.set("Error: boom", StatusTone::Negative, start + Duration::from_secs(2));

        // The first update's deadline has passed, the second's has not.
        status.tick(start + Duration::from_millis(3500));
        assert_eq!(status.tone(), StatusTone::Negative);
        assert_eq!(
            status.time_until_revert(start + Duration::from_millis(3500)),
            Some(Duration::from_millis(1500))
        );

        status.tick(start + Duration::from_secs(5));
        assert_eq!(status.tone(), StatusTone::Neutral);
    }

    #[test]
    fn neutral_messages_cancel_a_pending_revert() {
        let start = now();
        let mut status = StatusLine::new(Duration::from_secs(3));
        status.set("ok", StatusTone::Positive, start);
        status.set("Training model...", StatusTone::Neutral, start + Duration::from_secs(1));

        assert_eq!(status.time_until_revert(start + Duration::from_secs(1)), None);
        assert_eq!(status.message(), "Training model...");
    }
}
