//! Sound cue forwarding.
//!
//! The ECS side only ever writes [`SoundCue`] messages. These systems move
//! them across the [`CueBridge`] channel to the presentation layer and then
//! advance the message queue. Run them last in the frame, in this order:
//! [`forward_sound_cues`], then [`update_sound_cues`].

use crate::events::sound::SoundCue;
use crate::resources::cues::CueBridge;
use bevy_ecs::prelude::{MessageReader, Messages, Res, ResMut};
use log::trace;

/// Forward this frame's cues to the bridge channel.
///
/// A disconnected receiver just means nobody is listening; cues are dropped.
pub fn forward_sound_cues(bridge: Res<CueBridge>, mut reader: MessageReader<SoundCue>) {
    for cue in reader.read() {
        trace!("Sound cue {:?}", cue);
        let _ = bridge.tx_cue.send(*cue);
    }
}

/// Advance the ECS message queue for [`SoundCue`].
pub fn update_sound_cues(mut msgs: ResMut<Messages<SoundCue>>) {
    msgs.update();
}
