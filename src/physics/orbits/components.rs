#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::f64::consts::TAU;

use bevy::render::color::Color;
use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// One full orbit in radians, the wrap threshold for [`OrbitAngle`].
pub const FULL_ROTATION: f64 = TAU;

/// The eight planets, ordered by distance from the sun.
/// The discriminant is the planet's index in every per-planet table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro)]
pub enum PlanetKind {
    /// Index 0
    Mercury,
    /// Index 1
    Venus,
    /// Index 2
    Earth,
    /// Index 3
    Mars,
    /// Index 4
    Jupiter,
    /// Index 5
    Saturn,
    /// Index 6
    Uranus,
    /// Index 7
    Neptune,
}

impl PlanetKind {
    /// Every planet in index order
    pub const ALL: [PlanetKind; PlanetKind::COUNT] = [
        PlanetKind::Mercury,
        PlanetKind::Venus,
        PlanetKind::Earth,
        PlanetKind::Mars,
        PlanetKind::Jupiter,
        PlanetKind::Saturn,
        PlanetKind::Uranus,
        PlanetKind::Neptune,
    ];

    /// The planet's index in per-planet tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// The radius the planet is drawn with, in pixels.
    pub fn render_radius(self) -> f32 {
        match self {
            PlanetKind::Mercury => 2.0,
            PlanetKind::Venus => 4.9,
            PlanetKind::Earth => 5.2,
            PlanetKind::Mars => 2.6,
            PlanetKind::Jupiter => 11.2,
            PlanetKind::Saturn => 9.4,
            PlanetKind::Uranus => 8.8,
            PlanetKind::Neptune => 3.8,
        }
    }

    /// Default distance from the sun, in pixels.
    pub fn default_distance(self) -> OrbitalDistance {
        OrbitalDistance(match self {
            PlanetKind::Mercury => 75.0,
            PlanetKind::Venus => 110.0,
            PlanetKind::Earth => 150.0,
            PlanetKind::Mars => 200.0,
            PlanetKind::Jupiter => 250.0,
            PlanetKind::Saturn => 300.0,
            PlanetKind::Uranus => 350.0,
            PlanetKind::Neptune => 400.0,
        })
    }

    /// Default angular speed, in radians per tick.
    pub fn default_speed(self) -> AngularSpeed {
        AngularSpeed(match self {
            PlanetKind::Mercury => 0.017,
            PlanetKind::Venus => 0.004,
            PlanetKind::Earth => 0.003,
            PlanetKind::Mars => 0.0016,
            PlanetKind::Jupiter => 0.000533,
            PlanetKind::Saturn => 0.000262,
            PlanetKind::Uranus => 0.000131,
            PlanetKind::Neptune => 0.000087,
        })
    }

    /// The fill color of the planet and its trail
    pub fn color(self) -> Color {
        match self {
            PlanetKind::Mercury => Color::rgb_u8(128, 128, 128),
            PlanetKind::Venus => Color::rgb_u8(255, 165, 0),
            PlanetKind::Earth => Color::rgb_u8(0, 0, 255),
            PlanetKind::Mars => Color::rgb_u8(255, 0, 0),
            PlanetKind::Jupiter => Color::rgb_u8(255, 69, 0),
            PlanetKind::Saturn => Color::rgb_u8(210, 180, 140),
            PlanetKind::Uranus => Color::rgb_u8(139, 69, 19),
            PlanetKind::Neptune => Color::rgb_u8(0, 191, 255),
        }
    }
}

/// Radius of a circular orbit in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, From, Into)]
pub struct OrbitalDistance(pub f64);

/// Angle advanced per tick, in radians.
/// Positive is clockwise on screen, since screen y points down.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, From, Into)]
pub struct AngularSpeed(pub f64);

/// Current angle of a planet along its orbit, in radians.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, From, Into)]
pub struct OrbitAngle(pub f64);

impl OrbitAngle {
    /// True if the angle lies in `[0, FULL_ROTATION)`
    pub fn is_normalized(self) -> bool {
        (0.0..FULL_ROTATION).contains(&self.0)
    }

    /// The angle in degrees, for display
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}
