//! Event and message types used by the simulation.
//!
//! Submodules:
//! - [`round`] – end-of-round event and the observer that freezes the craft
//! - [`sound`] – sound cue messages for the presentation layer
pub mod round;
pub mod sound;
