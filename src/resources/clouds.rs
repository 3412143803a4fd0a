//! Decorative cloud layer advected by the wind.
//!
//! Clouds are spawned once when the level starts and never despawn: when a
//! cloud leaves the map on one side it reappears on the opposite side, offset
//! by its own size so it slides back in instead of popping.
//!
//! Nothing in the game logic reads the clouds; they only exist so the
//! presentation layer has something that visibly moves with the wind.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of clouds in one level.
pub const MAX_CLOUDS: usize = 10_000;

/// Spawn and motion parameters for the [`CloudLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudParams {
    /// Clouds spawned at level 1.
    pub base_count: u32,
    /// Extra clouds per level above 1.
    pub per_level: u32,
    /// Scale applied to the wind vector when moving clouds.
    pub speed_multiplier: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            base_count: 5,
            per_level: 3,
            speed_multiplier: 2.0,
            width: 80.0,
            height: 40.0,
        }
    }
}

impl CloudParams {
    /// Number of clouds for a difficulty level (`level` starts at 1).
    ///
    /// `None` when the count does not fit in a `usize`.
    pub fn count_for_level(&self, level: u32) -> Option<usize> {
        let extra = (self.per_level as usize).checked_mul(level.saturating_sub(1) as usize)?;
        (self.base_count as usize).checked_add(extra)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudParticle {
    /// Bottom-left corner in map units.
    pub position: Vec2,
    pub size: Vec2,
}

/// All clouds of the current level.
#[derive(Resource, Debug, Clone)]
pub struct CloudLayer {
    particles: Vec<CloudParticle>,
    map_size: Vec2,
    speed_multiplier: f32,
}

impl CloudLayer {
    /// Scatter the level's clouds uniformly over the map.
    ///
    /// The count is capped at [`MAX_CLOUDS`]; validated configs never reach it.
    pub fn spawn(params: &CloudParams, level: u32, map_size: Vec2, rng: &mut Rng) -> Self {
        let size = Vec2::new(params.width, params.height);
        let count = params
            .count_for_level(level)
            .map_or(MAX_CLOUDS, |count| count.min(MAX_CLOUDS));
        let particles = (0..count)
            .map(|_| CloudParticle {
                position: Vec2::new(rng.f32() * map_size.x, rng.f32() * map_size.y),
                size,
            })
            .collect();
        Self::from_particles(particles, map_size, params.speed_multiplier)
    }

    pub fn from_particles(
        particles: Vec<CloudParticle>,
        map_size: Vec2,
        speed_multiplier: f32,
    ) -> Self {
        Self {
            particles,
            map_size,
            speed_multiplier,
        }
    }

    /// Move every cloud by `wind * dt * speed_multiplier` and wrap at the edges.
    pub fn advect(&mut self, wind: Vec2, dt: f32) {
        let delta = wind * dt * self.speed_multiplier;
        for cloud in &mut self.particles {
            cloud.position += delta;
            wrap(cloud, self.map_size);
        }
    }

    pub fn particles(&self) -> &[CloudParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn wrap(cloud: &mut CloudParticle, map_size: Vec2) {
    if cloud.position.x > map_size.x {
        cloud.position.x = -cloud.size.x;
    } else if cloud.position.x < -cloud.size.x {
        cloud.position.x = map_size.x;
    }
    if cloud.position.y > map_size.y {
        cloud.position.y = -cloud.size.y;
    } else if cloud.position.y < -cloud.size.y {
        cloud.position.y = map_size.y;
    }
}
