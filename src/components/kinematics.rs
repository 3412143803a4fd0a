//! Player craft kinematics.
//!
//! [`PlayerKinematics`] is the motion model of the zeppelin. It is a plain
//! struct with methods so it can be driven directly in tests, and a
//! [`Component`] so the frame schedule can find it on the craft entity.
//!
//! # States
//!
//! - *Not started*: `can_move == false`. Every motion operation is a no-op.
//! - *Moving*: entered through [`PlayerKinematics::begin_motion`], left only
//!   through [`PlayerKinematics::reset`].
//! - *Paused* is orthogonal: while set, speed/steer/wind/integrate are no-ops
//!   and the state is preserved. Cleared by `reset` or `set_paused(false)`.
//!
//! # Conventions
//!
//! The craft always travels along the negative x axis; `velocity.x` is
//! rewritten to `-speed` whenever speed changes. Y grows upward.
//!
//! Steering snaps `velocity.y` to `±speed` and integration bleeds it off by
//! `steer_decay` every step. Wind is added with per-axis damping so it
//! perturbs the craft without overriding the player.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::gameconfig::MapBounds;

/// Distance within which the craft counts as having reached a point.
pub const ENDPOINT_TOLERANCE: f32 = 10.0;

/// Per-craft constants for [`PlayerKinematics`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicsTuning {
    /// Lowest speed once moving. Also the speed set by `begin_motion`.
    pub min_speed: f32,
    pub max_speed: f32,
    /// Factor applied to `velocity.y` after every integration step.
    pub steer_decay: f32,
    /// Per-axis fraction of the wind added to the velocity.
    pub wind_damping: Vec2,
}

impl Default for KinematicsTuning {
    fn default() -> Self {
        Self {
            min_speed: 1.0,
            max_speed: 20.0,
            steer_decay: 0.9,
            wind_damping: Vec2::new(0.2, 0.3),
        }
    }
}

/// Position/velocity state of the player craft.
#[derive(Component, Clone, Debug)]
pub struct PlayerKinematics {
    position: Vec2,
    velocity: Vec2,
    speed: f32,
    can_move: bool,
    paused: bool,
    /// Seek target. When set, integration also moves toward it at `speed`.
    target: Option<Vec2>,
    tuning: KinematicsTuning,
}

impl PlayerKinematics {
    /// Create a stationary craft at `start`.
    pub fn new(start: Vec2, tuning: KinematicsTuning) -> Self {
        Self {
            position: start,
            velocity: Vec2::ZERO,
            speed: 0.0,
            can_move: false,
            paused: false,
            target: None,
            tuning,
        }
    }

    fn active(&self) -> bool {
        self.can_move && !self.paused
    }

    /// Start moving at the minimum speed.
    ///
    /// Returns `true` only on the transition into the moving state; calling it
    /// again while moving, or while paused, changes nothing.
    pub fn begin_motion(&mut self) -> bool {
        if self.can_move || self.paused {
            return false;
        }
        self.can_move = true;
        self.speed = self.tuning.min_speed;
        self.velocity.x = -self.speed;
        true
    }

    /// Change the forward speed by `delta`, clamped to the tuning range.
    pub fn adjust_speed(&mut self, delta: f32) {
        if !self.active() {
            return;
        }
        self.speed = (self.speed + delta).clamp(self.tuning.min_speed, self.tuning.max_speed);
        self.velocity.x = -self.speed;
    }

    pub fn steer_up(&mut self) {
        if self.active() {
            self.velocity.y = self.speed;
        }
    }

    pub fn steer_down(&mut self) {
        if self.active() {
            self.velocity.y = -self.speed;
        }
    }

    /// Seek toward `point` during subsequent integration steps.
    pub fn set_target(&mut self, point: Vec2) {
        self.target = Some(point);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Add the damped wind vector to the velocity.
    pub fn apply_wind(&mut self, wind: Vec2) {
        if !self.active() {
            return;
        }
        self.velocity += wind * self.tuning.wind_damping;
    }

    /// Advance the position by `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        if !self.active() {
            return;
        }

        if let Some(target) = self.target {
            let to_target = target - self.position;
            let distance = to_target.length();
            let reach = self.speed * dt;
            if distance > reach {
                // distance > reach >= 0, so the division is safe
                self.position += to_target / distance * reach;
            } else {
                self.position = target;
                self.velocity = Vec2::ZERO;
                self.target = None;
            }
        }

        self.position += self.velocity * dt;
        self.velocity.y *= self.tuning.steer_decay;
    }

    /// Put the craft back at `position` in the not-started state.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.speed = 0.0;
        self.can_move = false;
        self.paused = false;
        self.target = None;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether [`begin_motion`](Self::begin_motion) has been called since the
    /// last reset. The round timer only runs once this is true.
    pub fn has_started(&self) -> bool {
        self.can_move
    }

    /// `true` when the craft is within [`ENDPOINT_TOLERANCE`] of `endpoint`.
    /// A craft exactly on the tolerance circle has arrived.
    pub fn is_at_endpoint(&self, endpoint: Vec2) -> bool {
        self.position.distance(endpoint) <= ENDPOINT_TOLERANCE
    }

    /// `true` when the craft is strictly outside `bounds`. Edges count as inside.
    pub fn is_out_of_bounds(&self, bounds: &MapBounds) -> bool {
        self.position.x < bounds.left
            || self.position.x > bounds.width
            || self.position.y < 0.0
            || self.position.y > bounds.height
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn tuning(&self) -> &KinematicsTuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    fn moving_at(x: f32, y: f32) -> PlayerKinematics {
        let mut k = PlayerKinematics::new(Vec2::new(x, y), KinematicsTuning::default());
        k.begin_motion();
        k
    }

    fn bounds() -> MapBounds {
        MapBounds {
            left: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    // ==================== STATE MACHINE TESTS ====================

    #[test]
    fn test_new_is_not_started() {
        let k = PlayerKinematics::new(Vec2::new(620.0, 500.0), KinematicsTuning::default());
        assert!(!k.has_started());
        assert!(!k.is_paused());
        assert_eq!(k.speed(), 0.0);
        assert_eq!(k.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_begin_motion_sets_min_speed_leftward() {
        let mut k = PlayerKinematics::new(Vec2::ZERO, KinematicsTuning::default());
        assert!(k.begin_motion());
        assert!(k.has_started());
        assert!(approx_eq(k.speed(), 1.0));
        assert!(approx_eq(k.velocity().x, -1.0));
    }

    #[test]
    fn test_begin_motion_is_idempotent() {
        let mut k = moving_at(0.0, 0.0);
        k.adjust_speed(5.0);
        assert!(!k.begin_motion());
        assert!(approx_eq(k.speed(), 6.0));
    }

    #[test]
    fn test_begin_motion_ignored_while_paused() {
        let mut k = PlayerKinematics::new(Vec2::ZERO, KinematicsTuning::default());
        k.set_paused(true);
        assert!(!k.begin_motion());
        assert!(!k.has_started());
    }

    #[test]
    fn test_operations_before_start_are_noops() {
        let mut k = PlayerKinematics::new(Vec2::new(5.0, 5.0), KinematicsTuning::default());
        k.adjust_speed(3.0);
        k.steer_up();
        k.apply_wind(Vec2::new(10.0, 10.0));
        k.integrate(1.0);
        assert_eq!(k.position(), Vec2::new(5.0, 5.0));
        assert_eq!(k.velocity(), Vec2::ZERO);
        assert_eq!(k.speed(), 0.0);
    }

    // ==================== SPEED TESTS ====================

    #[test]
    fn test_speed_clamped_to_range() {
        let mut k = moving_at(0.0, 0.0);
        for delta in [0.1, 5.0, 30.0, -0.5, -100.0, 2.5, 19.0, -0.1, 100.0] {
            k.adjust_speed(delta);
            assert!(k.speed() >= 1.0 && k.speed() <= 20.0);
            assert!(approx_eq(k.velocity().x, -k.speed()));
        }
        assert!(approx_eq(k.speed(), 20.0));
    }

    // ==================== STEERING TESTS ====================

    #[test]
    fn test_steer_snaps_and_decays() {
        let mut k = moving_at(0.0, 0.0);
        k.adjust_speed(9.0);
        k.steer_up();
        assert!(approx_eq(k.velocity().y, 10.0));
        k.integrate(0.1);
        assert!(approx_eq(k.position().y, 1.0));
        assert!(approx_eq(k.velocity().y, 9.0));
        k.steer_down();
        assert!(approx_eq(k.velocity().y, -10.0));
    }

    // ==================== WIND TESTS ====================

    #[test]
    fn test_wind_is_damped_per_axis() {
        let mut k = moving_at(0.0, 0.0);
        k.apply_wind(Vec2::new(10.0, 10.0));
        assert!(vec_approx_eq(k.velocity(), Vec2::new(-1.0 + 2.0, 3.0)));
    }

    // ==================== PAUSE TESTS ====================

    #[test]
    fn test_pause_freezes_state() {
        let mut k = moving_at(100.0, 100.0);
        k.adjust_speed(4.0);
        k.steer_up();
        k.set_paused(true);
        let (pos, vel, speed) = (k.position(), k.velocity(), k.speed());

        k.apply_wind(Vec2::new(5.0, -5.0));
        k.integrate(1.0);
        k.adjust_speed(3.0);
        k.steer_down();

        assert_eq!(k.position(), pos);
        assert_eq!(k.velocity(), vel);
        assert_eq!(k.speed(), speed);

        k.set_paused(false);
        k.integrate(1.0);
        assert!(k.position() != pos);
    }

    // ==================== INTEGRATION TESTS ====================

    #[test]
    fn test_integrate_moves_left() {
        let mut k = moving_at(100.0, 50.0);
        k.adjust_speed(1.0);
        k.integrate(0.5);
        assert!(vec_approx_eq(k.position(), Vec2::new(99.0, 50.0)));
    }

    #[test]
    fn test_seek_moves_toward_target() {
        let mut k = moving_at(0.0, 0.0);
        k.adjust_speed(9.0);
        // cancel the forward drift so only the seek step moves the craft
        k.apply_wind(Vec2::new(50.0, 0.0));
        k.set_target(Vec2::new(0.0, 100.0));
        k.integrate(1.0);
        assert!(vec_approx_eq(k.position(), Vec2::new(0.0, 10.0)));
        assert_eq!(k.target(), Some(Vec2::new(0.0, 100.0)));
    }

    #[test]
    fn test_seek_snaps_when_in_reach() {
        let mut k = moving_at(0.0, 0.0);
        k.adjust_speed(9.0);
        k.set_target(Vec2::new(3.0, 4.0));
        k.integrate(1.0);
        assert_eq!(k.position(), Vec2::new(3.0, 4.0));
        assert_eq!(k.velocity(), Vec2::ZERO);
        assert!(k.target().is_none());
    }

    // ==================== RESET TESTS ====================

    #[test]
    fn test_reset_restores_initial_state() {
        let mut k = moving_at(0.0, 0.0);
        k.adjust_speed(7.0);
        k.steer_up();
        k.set_target(Vec2::new(1.0, 1.0));
        k.integrate(1.0);
        k.set_paused(true);

        k.reset(Vec2::new(620.0, 500.0));
        assert_eq!(k.position(), Vec2::new(620.0, 500.0));
        assert_eq!(k.velocity(), Vec2::ZERO);
        assert_eq!(k.speed(), 0.0);
        assert!(!k.has_started());
        assert!(!k.is_paused());
        assert!(k.target().is_none());
    }

    // ==================== ENDPOINT / BOUNDS TESTS ====================

    #[test]
    fn test_endpoint_tolerance() {
        let dest = Vec2::new(60.0, 297.0);
        assert!(moving_at(61.0, 297.0).is_at_endpoint(dest));
        assert!(moving_at(50.0, 297.0).is_at_endpoint(dest));
        assert!(!moving_at(49.9, 297.0).is_at_endpoint(dest));
        assert!(!moving_at(40.0, 297.0).is_at_endpoint(dest));
    }

    #[test]
    fn test_out_of_bounds_edges_inclusive() {
        let b = bounds();
        assert!(moving_at(-5.0, 300.0).is_out_of_bounds(&b));
        assert!(!moving_at(0.0, 0.0).is_out_of_bounds(&b));
        assert!(!moving_at(800.0, 600.0).is_out_of_bounds(&b));
        assert!(moving_at(800.5, 300.0).is_out_of_bounds(&b));
        assert!(moving_at(400.0, -0.1).is_out_of_bounds(&b));
        assert!(moving_at(400.0, 600.1).is_out_of_bounds(&b));
    }

    #[test]
    fn test_left_bound_is_respected() {
        let b = MapBounds {
            left: 50.0,
            ..bounds()
        };
        assert!(moving_at(49.0, 300.0).is_out_of_bounds(&b));
        assert!(!moving_at(50.0, 300.0).is_out_of_bounds(&b));
    }
}
