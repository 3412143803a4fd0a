//! Round timer and end-condition systems.
//!
//! Both run after the craft has been integrated for the frame, so the
//! evaluation always sees the position the player will see drawn.
use bevy_ecs::prelude::*;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::events::round::RoundEndedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::session::SessionState;
use crate::resources::worldtime::WorldTime;

/// Count the round budget down while the craft is moving and not paused.
pub fn session_timer_system(
    mut session: ResMut<SessionState>,
    query: Query<&PlayerKinematics, With<Craft>>,
    time: Res<WorldTime>,
) {
    let running = query
        .iter()
        .any(|kinematics| kinematics.has_started() && !kinematics.is_paused());
    session.tick(time.delta, running);
}

/// Check timeout, arrival and bounds, and trigger [`RoundEndedEvent`] when the
/// round is decided.
pub fn evaluate_session_system(
    mut session: ResMut<SessionState>,
    query: Query<&PlayerKinematics, With<Craft>>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let destination = config.destination();
    let bounds = config.bounds();
    for kinematics in query.iter() {
        let at_endpoint = kinematics.is_at_endpoint(destination);
        let out_of_bounds = kinematics.is_out_of_bounds(&bounds);
        if let Some(outcome) = session.evaluate(at_endpoint, out_of_bounds) {
            commands.trigger(RoundEndedEvent { outcome });
        }
    }
}
