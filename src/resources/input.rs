//! Per-frame input resource.
//!
//! The presentation layer translates its key/mouse state into a
//! [`FrameInput`] each frame; the simulation never reads devices itself.
//! Held flags stay true for every frame the key is down, edge flags only on
//! the frame the key went down.
use bevy_ecs::prelude::*;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Start moving if idle, then speed up. Held.
    pub accelerate: bool,
    /// Slow down. Held.
    pub decelerate: bool,
    /// Held.
    pub steer_up: bool,
    /// Held.
    pub steer_down: bool,
    /// Restart the round. Edge.
    pub restart: bool,
    /// Toggle pause. Edge.
    pub pause_toggle: bool,
    /// New seek target, if one was picked this frame.
    pub seek_target: Option<Vec2>,
    /// Drop the current seek target. Edge. Applied before `seek_target`.
    pub cancel_seek: bool,
}

impl FrameInput {
    pub fn accelerating() -> Self {
        Self {
            accelerate: true,
            ..Self::default()
        }
    }

    pub fn with_steer_up(mut self) -> Self {
        self.steer_up = true;
        self
    }

    pub fn with_steer_down(mut self) -> Self {
        self.steer_down = true;
        self
    }
}
