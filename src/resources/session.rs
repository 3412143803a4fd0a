//! Round timer and end-of-round evaluation.
//!
//! [`SessionState`] counts the round budget down once the craft has started
//! moving and decides the [`Outcome`] from facts the caller supplies (is the
//! craft at the destination, is it out of bounds). It never looks at the
//! craft itself, which keeps it trivially testable.

use bevy_ecs::prelude::Resource;

use crate::events::sound::SoundCue;

/// Result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Win,
    LoseTimeout,
    LoseOutOfBounds,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn is_loss(self) -> bool {
        matches!(self, Outcome::LoseTimeout | Outcome::LoseOutOfBounds)
    }

    /// End-of-round dialog text. `None` while the round is running.
    pub fn notice(self, destination_name: &str) -> Option<RoundNotice> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win => Some(RoundNotice::new(
                "Congratulations!",
                format!("You have reached {}!", destination_name),
            )),
            Outcome::LoseTimeout => Some(RoundNotice::new("Game Over", "You are too late!")),
            Outcome::LoseOutOfBounds => Some(RoundNotice::new("Game Over", "You went far away!")),
        }
    }

    /// Sound to play when the round ends this way.
    pub fn cue(self) -> Option<SoundCue> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win => Some(SoundCue::Win),
            Outcome::LoseTimeout | Outcome::LoseOutOfBounds => Some(SoundCue::GameOver),
        }
    }
}

/// Title and body of the end-of-round dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundNotice {
    pub title: String,
    pub message: String,
}

impl RoundNotice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SessionState {
    time_limit: f32,
    remaining: f32,
    outcome: Outcome,
    notice: Option<RoundNotice>,
}

impl SessionState {
    pub fn new(time_limit: f32) -> Self {
        Self {
            time_limit,
            remaining: time_limit,
            outcome: Outcome::InProgress,
            notice: None,
        }
    }

    /// Count down by `dt` if the round is running and the craft has started.
    pub fn tick(&mut self, dt: f32, started: bool) {
        if started && !self.is_over() {
            self.remaining -= dt;
        }
    }

    /// Decide the outcome for this frame.
    ///
    /// Conditions are checked in a fixed order: timeout (only when not at the
    /// endpoint), then arrival, then out of bounds. Returns the new outcome
    /// only on the frame the round ends; once over, further calls return `None`.
    pub fn evaluate(&mut self, at_endpoint: bool, out_of_bounds: bool) -> Option<Outcome> {
        if self.is_over() {
            return None;
        }
        let outcome = if self.remaining <= 0.0 && !at_endpoint {
            Outcome::LoseTimeout
        } else if at_endpoint {
            Outcome::Win
        } else if out_of_bounds {
            Outcome::LoseOutOfBounds
        } else {
            return None;
        };
        self.outcome = outcome;
        Some(outcome)
    }

    /// Back to a fresh round.
    pub fn reset(&mut self) {
        self.remaining = self.time_limit;
        self.outcome = Outcome::InProgress;
        self.notice = None;
    }

    pub fn remaining_time(&self) -> f32 {
        self.remaining
    }

    pub fn time_limit(&self) -> f32 {
        self.time_limit
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn notice(&self) -> Option<&RoundNotice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Option<RoundNotice>) {
        self.notice = notice;
    }

    /// Remove and return the pending notice.
    pub fn take_notice(&mut self) -> Option<RoundNotice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_waits_for_start() {
        let mut s = SessionState::new(60.0);
        s.tick(1.0, false);
        assert_eq!(s.remaining_time(), 60.0);
        s.tick(1.0, true);
        assert_eq!(s.remaining_time(), 59.0);
    }

    #[test]
    fn test_timeout_after_budget() {
        let mut s = SessionState::new(60.0);
        for _ in 0..60 {
            s.tick(1.0, true);
        }
        assert!(s.remaining_time() <= 0.0);
        assert_eq!(s.evaluate(false, false), Some(Outcome::LoseTimeout));
        assert_eq!(s.outcome(), Outcome::LoseTimeout);
        assert!(s.is_over());
    }

    #[test]
    fn test_arrival_at_deadline_wins() {
        let mut s = SessionState::new(1.0);
        s.tick(1.0, true);
        assert_eq!(s.evaluate(true, false), Some(Outcome::Win));
    }

    #[test]
    fn test_arrival_beats_out_of_bounds() {
        let mut s = SessionState::new(60.0);
        assert_eq!(s.evaluate(true, true), Some(Outcome::Win));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut s = SessionState::new(60.0);
        assert_eq!(s.evaluate(false, false), None);
        assert_eq!(s.evaluate(false, true), Some(Outcome::LoseOutOfBounds));
    }

    #[test]
    fn test_over_round_is_frozen() {
        let mut s = SessionState::new(60.0);
        s.evaluate(false, true);
        assert_eq!(s.evaluate(true, false), None);
        assert_eq!(s.outcome(), Outcome::LoseOutOfBounds);
        s.tick(5.0, true);
        assert_eq!(s.remaining_time(), 60.0);
    }

    #[test]
    fn test_reset() {
        let mut s = SessionState::new(30.0);
        s.tick(10.0, true);
        s.evaluate(false, true);
        s.set_notice(Outcome::LoseOutOfBounds.notice("Liverpool"));
        s.reset();
        assert_eq!(s.remaining_time(), 30.0);
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert!(s.notice().is_none());
    }

    #[test]
    fn test_notices() {
        assert_eq!(
            Outcome::Win.notice("Liverpool"),
            Some(RoundNotice::new(
                "Congratulations!",
                "You have reached Liverpool!"
            ))
        );
        assert_eq!(
            Outcome::LoseTimeout.notice("x").unwrap().message,
            "You are too late!"
        );
        assert_eq!(
            Outcome::LoseOutOfBounds.notice("x").unwrap().message,
            "You went far away!"
        );
        assert!(Outcome::InProgress.notice("x").is_none());
    }

    #[test]
    fn test_cues() {
        assert_eq!(Outcome::Win.cue(), Some(SoundCue::Win));
        assert_eq!(Outcome::LoseTimeout.cue(), Some(SoundCue::GameOver));
        assert_eq!(Outcome::InProgress.cue(), None);
    }
}
