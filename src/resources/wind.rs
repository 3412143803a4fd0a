//! Stochastic wind field resource.
//!
//! The [`WindField`] keeps two vectors: `current`, which is what the craft
//! feels, and `target`, which `current` chases every step. Randomness only
//! ever touches `target`, so the applied wind changes smoothly even though it
//! is driven by plain uniform draws.
//!
//! Each [`WindField::step`] does, in order:
//!
//! 1. With probability `change_frequency`, pick a new target with both axes
//!    uniform in `[-max_change/2, max_change/2)`, clamped to `max_speed`.
//! 2. Move `current` toward `target` by `smoothing` (exponential approach).
//! 3. With probability `gust_probability`, add a gust impulse with both axes
//!    uniform in `[-max_change, max_change)` to `target`, clamped again.
//!
//! The probabilities are evaluated once per step and are not scaled by `dt`,
//! so the retarget rate depends on the frame rate.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

/// Tuning values for a [`WindField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindParams {
    /// Upper bound for the target wind magnitude.
    pub max_speed: f32,
    /// Probability per step of picking a new target.
    pub change_frequency: f32,
    /// Width of the retarget sample range (gusts use twice this).
    pub max_change: f32,
    /// Fraction of the remaining gap closed each step, in `(0, 1]`.
    pub smoothing: f32,
    /// Probability per step of a gust.
    pub gust_probability: f32,
}

impl Default for WindParams {
    fn default() -> Self {
        Self {
            max_speed: 13.0,
            change_frequency: 0.1,
            max_change: 5.0,
            smoothing: 0.05,
            gust_probability: 0.05,
        }
    }
}

/// Something noteworthy that happened during a wind step.
///
/// Returned from [`WindField::step`] so the caller can map it to a sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindCue {
    /// A new target was drawn.
    Shift,
    /// A gust impulse was added to the target.
    Gust,
}

/// Smoothed random-walk wind vector.
#[derive(Resource)]
pub struct WindField {
    current: Vec2,
    target: Vec2,
    params: WindParams,
    rng: Rng,
}

impl WindField {
    /// Create a calm wind field driven by the given generator.
    pub fn new(params: WindParams, rng: Rng) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            params,
            rng,
        }
    }

    /// Create a calm wind field with a deterministic seed.
    pub fn with_seed(params: WindParams, seed: u64) -> Self {
        Self::new(params, Rng::with_seed(seed))
    }

    /// Advance the field by one simulation tick.
    ///
    /// `_dt` is accepted for symmetry with the other per-frame updates; the
    /// retarget and gust rolls happen once per call regardless of its value.
    pub fn step(&mut self, _dt: f32) -> ArrayVec<WindCue, 2> {
        let mut cues = ArrayVec::new();

        if self.rng.f32() < self.params.change_frequency {
            let span = self.params.max_change;
            self.target = Vec2::new(
                (self.rng.f32() - 0.5) * span,
                (self.rng.f32() - 0.5) * span,
            )
            .clamp_length_max(self.params.max_speed);
            debug!("Wind retarget -> ({:.2}, {:.2})", self.target.x, self.target.y);
            cues.push(WindCue::Shift);
        }

        self.current = self.current.lerp(self.target, self.params.smoothing);

        if self.rng.f32() < self.params.gust_probability {
            let gust = Vec2::new(
                (self.rng.f32() - 0.5) * 2.0 * self.params.max_change,
                (self.rng.f32() - 0.5) * 2.0 * self.params.max_change,
            );
            self.target = (self.target + gust).clamp_length_max(self.params.max_speed);
            debug!("Wind gust ({:.2}, {:.2})", gust.x, gust.y);
            cues.push(WindCue::Gust);
        }

        cues
    }

    /// The wind currently applied to the craft. Returned by value.
    pub fn current_wind(&self) -> Vec2 {
        self.current
    }

    /// The vector `current` is converging toward.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Override the target, clamped to `max_speed`.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target.clamp_length_max(self.params.max_speed);
    }

    pub fn params(&self) -> &WindParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn still_params() -> WindParams {
        WindParams {
            change_frequency: 0.0,
            gust_probability: 0.0,
            ..WindParams::default()
        }
    }

    // ==================== BOUND TESTS ====================

    #[test]
    fn test_target_never_exceeds_max_speed() {
        let params = WindParams {
            max_speed: 3.0,
            change_frequency: 1.0,
            max_change: 50.0,
            smoothing: 0.5,
            gust_probability: 1.0,
        };
        let mut wind = WindField::with_seed(params, 7);
        for _ in 0..2_000 {
            wind.step(1.0 / 60.0);
            assert!(wind.target().length() <= params.max_speed + EPSILON);
            assert!(wind.current_wind().length() <= params.max_speed + EPSILON);
        }
    }

    #[test]
    fn test_set_target_is_clamped() {
        let mut wind = WindField::with_seed(still_params(), 1);
        wind.set_target(Vec2::new(100.0, 0.0));
        assert!((wind.target().length() - 13.0).abs() < EPSILON);
    }

    // ==================== SMOOTHING TESTS ====================

    #[test]
    fn test_current_converges_to_held_target() {
        let mut wind = WindField::with_seed(still_params(), 3);
        let target = Vec2::new(4.0, -3.0);
        wind.set_target(target);

        let mut last_gap = (target - wind.current_wind()).length();
        for _ in 0..200 {
            wind.step(1.0 / 60.0);
            let gap = (target - wind.current_wind()).length();
            assert!(gap <= last_gap + 1e-6);
            // each step keeps (1 - smoothing) of the gap
            assert!((gap - last_gap * 0.95).abs() < EPSILON);
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
    }

    #[test]
    fn test_no_cues_when_probabilities_are_zero() {
        let mut wind = WindField::with_seed(still_params(), 11);
        for _ in 0..100 {
            assert!(wind.step(0.016).is_empty());
        }
        assert_eq!(wind.target(), Vec2::ZERO);
    }

    #[test]
    fn test_always_retarget_and_gust_report_both_cues() {
        let params = WindParams {
            change_frequency: 1.0,
            gust_probability: 1.0,
            ..WindParams::default()
        };
        let mut wind = WindField::with_seed(params, 5);
        let cues = wind.step(0.016);
        assert_eq!(cues.as_slice(), &[WindCue::Shift, WindCue::Gust]);
    }

    #[test]
    fn test_retarget_sample_range() {
        let params = WindParams {
            change_frequency: 1.0,
            gust_probability: 0.0,
            max_speed: 100.0,
            ..WindParams::default()
        };
        let mut wind = WindField::with_seed(params, 99);
        for _ in 0..500 {
            wind.step(0.016);
            let t = wind.target();
            assert!(t.x >= -2.5 && t.x < 2.5);
            assert!(t.y >= -2.5 && t.y < 2.5);
        }
    }

    #[test]
    fn test_same_seed_same_wind() {
        let mut a = WindField::with_seed(WindParams::default(), 42);
        let mut b = WindField::with_seed(WindParams::default(), 42);
        for _ in 0..300 {
            assert_eq!(a.step(0.016), b.step(0.016));
            assert_eq!(a.current_wind(), b.current_wind());
        }
    }
}
