//! Simulation systems.
//!
//! Each frame runs these in a fixed chain (see
//! [`crate::game::build_frame_schedule`]): input, wind step, wind coupling,
//! integration, clouds, timer, evaluation, HUD, cue forwarding.
//!
//! Submodules overview
//! - [`audio`] – forward [`SoundCue`](crate::events::sound::SoundCue) messages to the cue channel
//! - [`clouds`] – advect the decorative cloud layer with the wind
//! - [`hud`] – format the speed/wind/time labels
//! - [`input`] – translate [`FrameInput`](crate::resources::input::FrameInput) into craft commands
//! - [`movement`] – integrate the craft position
//! - [`session`] – count the round timer down and decide the outcome
//! - [`time`] – update simulation time and delta
//! - [`wind`] – step the wind field and couple it into the craft

pub mod audio;
pub mod clouds;
pub mod hud;
pub mod input;
pub mod movement;
pub mod session;
pub mod time;
pub mod wind;
