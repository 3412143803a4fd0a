use bevy_ecs::prelude::*;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::resources::hud::Hud;
use crate::resources::session::SessionState;
use crate::resources::wind::WindField;

/// Refresh the HUD labels from this frame's final state.
pub fn hud_system(
    mut hud: ResMut<Hud>,
    query: Query<&PlayerKinematics, With<Craft>>,
    wind: Res<WindField>,
    session: Res<SessionState>,
) {
    let speed = query.iter().next().map_or(0.0, |k| k.speed());
    hud.update(speed, wind.current_wind(), session.remaining_time());
}
