//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`clouds`] – decorative cloud particles drifting with the wind
//! - [`craftprofiles`] – registry of selectable craft
//! - [`cues`] – channel bridge carrying sound cues out of the world
//! - [`gameconfig`] – level configuration, INI/JSON loading and validation
//! - [`hud`] – formatted speed/wind/time labels
//! - [`input`] – per-frame player input
//! - [`session`] – round timer, outcome and end-of-round notice
//! - [`wind`] – smoothed stochastic wind field
//! - [`worldtime`] – simulation clock

pub mod clouds;
pub mod craftprofiles;
pub mod cues;
pub mod gameconfig;
pub mod hud;
pub mod input;
pub mod session;
pub mod wind;
pub mod worldtime;
