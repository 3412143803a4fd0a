//! ECS components for entities.
//!
//! A level has a single entity, the player's craft, carrying:
//! - [`craft`] – marker naming the craft profile being flown
//! - [`kinematics`] – position/velocity/speed motion model with pause and seek

pub mod craft;
pub mod kinematics;
