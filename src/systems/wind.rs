//! Wind systems.
//!
//! [`wind_system`] advances the [`WindField`] and turns its retarget/gust
//! notifications into [`SoundCue`] messages. [`apply_wind_system`] then feeds
//! the current wind, by value, into every craft. They must run in that order
//! within a frame.
use bevy_ecs::prelude::*;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::events::sound::SoundCue;
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;

pub fn wind_system(
    mut wind: ResMut<WindField>,
    time: Res<WorldTime>,
    mut cues: MessageWriter<SoundCue>,
) {
    for cue in wind.step(time.delta) {
        cues.write(cue.into());
    }
}

pub fn apply_wind_system(
    wind: Res<WindField>,
    mut query: Query<&mut PlayerKinematics, With<Craft>>,
) {
    let current = wind.current_wind();
    for mut kinematics in query.iter_mut() {
        kinematics.apply_wind(current);
    }
}
