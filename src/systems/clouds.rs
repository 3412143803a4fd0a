//! Cloud advection system.
use bevy_ecs::prelude::*;

use crate::resources::clouds::CloudLayer;
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;

/// Drift the clouds with this frame's wind.
///
/// Runs after the wind step so clouds and craft see the same wind.
pub fn cloud_system(
    mut clouds: ResMut<CloudLayer>,
    wind: Res<WindField>,
    time: Res<WorldTime>,
) {
    clouds.advect(wind.current_wind(), time.delta);
}
