//! Celestials are the bodies drawn in the solar system.
//! The sun sits still in the middle of the window, the planets orbit it.

pub mod planet;
pub mod sun;
