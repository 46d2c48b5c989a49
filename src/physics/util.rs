//! Small engine agnostic helpers shared by the physics modules.

pub mod clock;
pub mod vectors;
