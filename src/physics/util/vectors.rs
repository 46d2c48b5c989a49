use std::fmt::Display;

use bevy::{
    math::{Vec2, Vec3},
    window::Window,
};
use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};

/// A point in window pixel space.
/// The origin is the top left corner of the window and y points down.
#[derive(Debug, Default, Copy, Clone, PartialEq, Add, Sub, AddAssign, SubAssign, From, Into)]
pub struct ScreenCoord(pub Vec2);

impl Display for ScreenCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ScreenCoord: ({}, {}))", self.0.x, self.0.y)
    }
}

impl ScreenCoord {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Converts to a bevy world translation at depth `z`.
    /// World y points up, so the y axis is flipped.
    pub fn to_world(self, z: f32) -> Vec3 {
        Vec3::new(self.0.x, -self.0.y, z)
    }

    /// Same as `to_world` but without the depth
    pub fn to_world_2d(self) -> Vec2 {
        Vec2::new(self.0.x, -self.0.y)
    }
}

/// The logical size of the drawable area of a window, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The middle of the window, where the sun sits
    pub fn center(&self) -> ScreenCoord {
        ScreenCoord::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<&Window> for ScreenSize {
    fn from(window: &Window) -> Self {
        Self::new(window.width(), window.height())
    }
}
