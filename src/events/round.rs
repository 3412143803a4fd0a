//! End-of-round event and observer.
//!
//! [`crate::systems::session::evaluate_session_system`] triggers a
//! [`RoundEndedEvent`] on the frame a round is decided. The observer in this
//! module freezes the craft, posts the end-of-round notice for the front end
//! and queues the matching sound cue. Restarting is left to
//! [`Session::acknowledge`](crate::game::Session::acknowledge) and
//! [`Session::restart`](crate::game::Session::restart).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::events::sound::SoundCue;
use crate::resources::gameconfig::GameConfig;
use crate::resources::session::{Outcome, SessionState};

#[derive(Event, Debug, Clone, Copy)]
pub struct RoundEndedEvent {
    pub outcome: Outcome,
}

/// Observer that applies the consequences of a decided round.
///
/// - pauses every [`Craft`] so nothing moves until restart
/// - stores the [`RoundNotice`](crate::resources::session::RoundNotice)
/// - writes the win / game over [`SoundCue`]
pub fn observe_round_ended(
    trigger: On<RoundEndedEvent>,
    mut crafts: Query<&mut PlayerKinematics, With<Craft>>,
    mut session: ResMut<SessionState>,
    config: Res<GameConfig>,
    mut cues: MessageWriter<SoundCue>,
) {
    let outcome = trigger.event().outcome;
    info!(
        "Round ended: {:?} with {:.2}s left",
        outcome,
        session.remaining_time()
    );

    for mut kinematics in crafts.iter_mut() {
        kinematics.set_paused(true);
    }
    session.set_notice(outcome.notice(&config.destination.name));
    if let Some(cue) = outcome.cue() {
        cues.write(cue);
    }
}
