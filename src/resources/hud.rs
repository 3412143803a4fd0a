//! Heads-up display text.
//!
//! The HUD shows three labels: craft speed, current wind and remaining time.
//! They are formatted here once per frame by
//! [`crate::systems::hud::hud_system`] so every front end shows the same text.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub speed: String,
    pub wind: String,
    pub timer: String,
}

impl Hud {
    pub fn update(&mut self, speed: f32, wind: Vec2, remaining: f32) {
        self.speed = format!("Speed: {:.1}", speed);
        self.wind = format!("Wind: {:.2}, {:.2}", wind.x, wind.y);
        self.timer = format!("Time: {:.2} s", remaining);
    }

    /// The labels in display order.
    pub fn lines(&self) -> [&str; 3] {
        [self.speed.as_str(), self.wind.as_str(), self.timer.as_str()]
    }
}
