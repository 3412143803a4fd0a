//! Frame clock.
//!
//! [`Session::step`](crate::game::Session::step) calls [`update_world_time`]
//! before the schedule runs, so every system of the frame sees the same
//! [`WorldTime::delta`]. The session's `time_scale` (from
//! `[session] time_scale`) stretches or shrinks game time: wind smoothing,
//! craft motion, cloud drift and the round timer all slow down together.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the clock by one frame of `dt` real seconds.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut clock = world.resource_mut::<WorldTime>();
    clock.delta = dt * clock.time_scale;
    clock.elapsed += clock.delta;
    clock.frame_count += 1;
}
