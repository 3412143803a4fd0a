//! Zeppelin library.
//!
//! Simulation core of a small 2D navigation game: a zeppelin flies across a
//! fixed map toward a destination against a stochastic wind, within a time
//! limit. This crate exposes the ECS components, resources, systems and events
//! that make up one level, plus the [`game::Session`] controller that a front
//! end drives once per frame. Rendering, UI and audio playback live outside.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;

pub use glam::Vec2;
