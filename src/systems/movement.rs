use bevy_ecs::prelude::*;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::resources::worldtime::WorldTime;

/// Integrate each craft's position from its velocity (and seek target).
pub fn integrate_system(
    mut query: Query<&mut PlayerKinematics, With<Craft>>,
    time: Res<WorldTime>,
) {
    for mut kinematics in query.iter_mut() {
        kinematics.integrate(time.delta);
    }
}
