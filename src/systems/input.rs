//! Input-to-craft controller.
//!
//! Reads the per-frame [`FrameInput`] and drives every [`Craft`]'s
//! [`PlayerKinematics`]:
//!
//! - `pause_toggle` flips the pause flag (ignored once the round is over)
//! - `cancel_seek` drops the seek point, then `seek_target` sets a new one
//! - `accelerate` starts motion if needed, then raises speed by `accel_step`
//! - `decelerate` lowers speed by `accel_step`
//! - `steer_up` / `steer_down` snap the vertical velocity
//!
//! `restart` is handled by [`Session::step`](crate::game::Session::step)
//! before the schedule runs.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::events::sound::SoundCue;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::FrameInput;
use crate::resources::session::SessionState;

pub fn player_input_system(
    mut query: Query<&mut PlayerKinematics, With<Craft>>,
    input: Res<FrameInput>,
    config: Res<GameConfig>,
    session: Res<SessionState>,
    mut cues: MessageWriter<SoundCue>,
) {
    let step = config.player.accel_step;
    for mut kinematics in query.iter_mut() {
        if input.pause_toggle && !session.is_over() {
            let paused = !kinematics.is_paused();
            kinematics.set_paused(paused);
            debug!("Craft paused: {}", paused);
        }
        if input.cancel_seek {
            kinematics.clear_target();
        }
        if let Some(target) = input.seek_target {
            kinematics.set_target(target);
        }
        if input.accelerate {
            if kinematics.begin_motion() {
                debug!("Craft started moving at {:?}", kinematics.position());
                cues.write(SoundCue::EngineStart);
            }
            kinematics.adjust_speed(step);
        }
        if input.decelerate {
            kinematics.adjust_speed(-step);
        }
        if input.steer_up {
            kinematics.steer_up();
        }
        if input.steer_down {
            kinematics.steer_down();
        }
    }
}
