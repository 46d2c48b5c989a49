//! The simulation state of the orbiting planets and the tick that advances it.

use std::time::Duration;

use bevy::{ecs::system::Resource, log::trace, math::Vec2};
use strum::EnumCount;
use strum_macros::{Display, EnumIter};

use crate::physics::util::{clock::Clock, vectors::ScreenCoord};

use super::{
    components::{AngularSpeed, OrbitAngle, OrbitalDistance, PlanetKind, FULL_ROTATION},
    trail::{Trail, DEFAULT_TRAIL_CAPACITY},
};

/// Default interval between two ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(5);

/// What happens to the angle once it completes a full rotation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum WrapPolicy {
    /// Keep the overshoot, so the angle is always `ticks * speed mod 2π`
    #[default]
    Carry,
    /// Snap back to exactly zero after a full forward orbit, dropping the overshoot
    Reset,
}

impl WrapPolicy {
    /// Brings an angle back into `[0, 2π)`, or leaves it alone if it already is.
    /// Negative angles are always folded, only a completed forward orbit is reset.
    pub fn wrap(self, angle: OrbitAngle) -> OrbitAngle {
        if angle.is_normalized() {
            return angle;
        }
        match self {
            WrapPolicy::Reset if angle.0 >= FULL_ROTATION => OrbitAngle(0.0),
            WrapPolicy::Carry | WrapPolicy::Reset => {
                let wrapped = angle.0.rem_euclid(FULL_ROTATION);
                // rem_euclid may round up to the modulus for tiny negatives
                if wrapped >= FULL_ROTATION {
                    OrbitAngle(0.0)
                } else {
                    OrbitAngle(wrapped)
                }
            }
        }
    }
}

/// The position of a point on a circle of radius `distance` around `center`.
/// Angle zero is to the right of the center, and positive angles go towards +y.
pub fn orbit_position(center: ScreenCoord, distance: OrbitalDistance, angle: OrbitAngle) -> ScreenCoord {
    let (sin, cos) = angle.0.sin_cos();
    ScreenCoord(Vec2::new(
        (center.0.x as f64 + distance.0 * cos) as f32,
        (center.0.y as f64 + distance.0 * sin) as f32,
    ))
}

/// Everything the simulation knows about a single planet
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetState {
    kind: PlanetKind,
    distance: OrbitalDistance,
    speed: AngularSpeed,
    angle: OrbitAngle,
    trail: Trail,
}

impl PlanetState {
    pub fn new(kind: PlanetKind, distance: OrbitalDistance, speed: AngularSpeed, trail_capacity: usize) -> Self {
        Self {
            kind,
            distance,
            speed,
            angle: OrbitAngle(0.0),
            trail: Trail::new(trail_capacity),
        }
    }

    /// Records the current position and then moves the planet along its orbit
    fn tick(&mut self, center: ScreenCoord, wrap_policy: WrapPolicy) {
        let position = orbit_position(center, self.distance, self.angle);
        self.trail.push(position);

        let advanced = OrbitAngle(self.angle.0 + self.speed.0);
        self.angle = wrap_policy.wrap(advanced);
        if self.angle != advanced {
            trace!("{} completed an orbit, angle wrapped to {}", self.kind, self.angle.0);
        }

        debug_assert!(self.angle.is_normalized(), "{} angle out of range: {}", self.kind, self.angle.0);
        debug_assert!(self.trail.len() <= self.trail.capacity());
    }

    pub fn get_kind(&self) -> PlanetKind {
        self.kind
    }
    pub fn get_distance(&self) -> OrbitalDistance {
        self.distance
    }
    pub fn get_speed(&self) -> AngularSpeed {
        self.speed
    }
    pub fn get_angle(&self) -> OrbitAngle {
        self.angle
    }
    pub fn get_trail(&self) -> &Trail {
        &self.trail
    }
    /// The position computed on the last tick, if there has been one
    pub fn get_position(&self) -> Option<ScreenCoord> {
        self.trail.latest()
    }
}

/// The whole simulation state.
/// One entry per planet, indexed by [`PlanetKind::index`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SolarSystem {
    planets: [PlanetState; PlanetKind::COUNT],
    wrap_policy: WrapPolicy,
    clock: Clock,
}

impl Default for SolarSystem {
    fn default() -> Self {
        SolarSystemBuilder::new().build()
    }
}

impl SolarSystem {
    /// Advances every planet by one tick around `center`
    pub fn tick(&mut self, center: ScreenCoord) {
        for planet in self.planets.iter_mut() {
            planet.tick(center, self.wrap_policy);
        }
        self.clock.update();
    }

    pub fn get_planet(&self, kind: PlanetKind) -> &PlanetState {
        &self.planets[kind.index()]
    }
    pub fn get_planets(&self) -> &[PlanetState; PlanetKind::COUNT] {
        &self.planets
    }
    pub fn get_wrap_policy(&self) -> WrapPolicy {
        self.wrap_policy
    }
    pub fn get_clock(&self) -> Clock {
        self.clock
    }
    pub fn get_tick_interval(&self) -> Duration {
        self.clock.get_interval()
    }
}

/// Builds a [`SolarSystem`], defaulting to the eight planets' standard orbits
pub struct SolarSystemBuilder {
    orbits: [(OrbitalDistance, AngularSpeed); PlanetKind::COUNT],
    trail_capacity: usize,
    wrap_policy: WrapPolicy,
    tick_interval: Duration,
}

impl Default for SolarSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystemBuilder {
    pub fn new() -> Self {
        Self {
            orbits: PlanetKind::ALL.map(|kind| (kind.default_distance(), kind.default_speed())),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            wrap_policy: WrapPolicy::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    pub fn orbit(mut self, kind: PlanetKind, distance: OrbitalDistance, speed: AngularSpeed) -> Self {
        self.orbits[kind.index()] = (distance, speed);
        self
    }

    pub fn trail_capacity(mut self, trail_capacity: usize) -> Self {
        self.trail_capacity = trail_capacity;
        self
    }

    pub fn wrap_policy(mut self, wrap_policy: WrapPolicy) -> Self {
        self.wrap_policy = wrap_policy;
        self
    }

    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn build(&self) -> SolarSystem {
        let planets = PlanetKind::ALL.map(|kind| {
            let (distance, speed) = self.orbits[kind.index()];
            PlanetState::new(kind, distance, speed, self.trail_capacity)
        });
        SolarSystem {
            planets,
            wrap_policy: self.wrap_policy,
            clock: Clock::new(self.tick_interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use strum::IntoEnumIterator;

    fn vec2_approx_eq(a: Vec2, b: Vec2, epsilon: f32) -> bool {
        (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon
    }

    macro_rules! assert_approx_eq_v2 {
        ($a:expr, $b:expr) => {
            assert!(
                vec2_approx_eq($a, $b, 1e-4),
                "Vectors not approximately equal: {:?} vs {:?}",
                $a,
                $b
            )
        };
    }

    /// Distance between two angles going the short way around the circle
    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(FULL_ROTATION);
        d.min(FULL_ROTATION - d)
    }

    const CENTER: ScreenCoord = ScreenCoord(Vec2::new(500.0, 400.0));

    #[test]
    fn test_position_at_angle_zero() {
        let position = orbit_position(
            ScreenCoord::new(500.0, 500.0),
            OrbitalDistance(100.0),
            OrbitAngle(0.0),
        );
        assert_approx_eq_v2!(position.0, Vec2::new(600.0, 500.0));
    }

    #[test]
    fn test_position_at_quarter_turn() {
        let position = orbit_position(ScreenCoord::ZERO, OrbitalDistance(100.0), OrbitAngle(FRAC_PI_2));
        assert_approx_eq_v2!(position.0, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_angle_after_n_ticks_carry() {
        let mut solar_system = SolarSystem::default();
        let n = 10_000;
        for _ in 0..n {
            solar_system.tick(CENTER);
        }
        for planet in solar_system.get_planets() {
            let expected = (n as f64 * planet.get_speed().0).rem_euclid(FULL_ROTATION);
            let actual = planet.get_angle().0;
            assert!(
                angular_distance(actual, expected) < 1e-9,
                "{}: expected {} got {}",
                planet.get_kind(),
                expected,
                actual
            );
            assert!(planet.get_angle().is_normalized());
        }
    }

    #[test]
    fn test_reset_policy_snaps_to_zero() {
        // 0.25 * 25 = 6.25 < 2π, 0.25 * 26 = 6.5 >= 2π
        let mut solar_system = SolarSystemBuilder::new()
            .orbit(PlanetKind::Mercury, OrbitalDistance(75.0), AngularSpeed(0.25))
            .wrap_policy(WrapPolicy::Reset)
            .build();
        for _ in 0..25 {
            solar_system.tick(CENTER);
        }
        let mercury = solar_system.get_planet(PlanetKind::Mercury);
        assert!((mercury.get_angle().0 - 6.25).abs() < 1e-12);
        solar_system.tick(CENTER);
        let mercury = solar_system.get_planet(PlanetKind::Mercury);
        assert_eq!(mercury.get_angle(), OrbitAngle(0.0));
    }

    #[test]
    fn test_carry_policy_keeps_overshoot() {
        let angle = WrapPolicy::Carry.wrap(OrbitAngle(FULL_ROTATION + 0.5));
        assert!((angle.0 - 0.5).abs() < 1e-12);
        let angle = WrapPolicy::Carry.wrap(OrbitAngle(-0.5));
        assert!((angle.0 - (FULL_ROTATION - 0.5)).abs() < 1e-12);
        assert!(WrapPolicy::Carry.wrap(OrbitAngle(-1e-300)).is_normalized());
    }

    #[test]
    fn test_negative_speed_stays_in_range() {
        for policy in WrapPolicy::iter() {
            let mut solar_system = SolarSystemBuilder::new()
                .orbit(PlanetKind::Earth, OrbitalDistance(150.0), AngularSpeed(-0.1))
                .wrap_policy(policy)
                .build();
            for _ in 0..100 {
                solar_system.tick(CENTER);
                let angle = solar_system.get_planet(PlanetKind::Earth).get_angle();
                assert!(angle.is_normalized(), "{}: {:?}", policy, angle);
            }
        }
    }

    #[test]
    fn test_negative_speed_keeps_moving() {
        for policy in WrapPolicy::iter() {
            let mut solar_system = SolarSystemBuilder::new()
                .orbit(PlanetKind::Earth, OrbitalDistance(150.0), AngularSpeed(-0.1))
                .wrap_policy(policy)
                .build();
            for _ in 0..10 {
                solar_system.tick(CENTER);
            }
            let earth = solar_system.get_planet(PlanetKind::Earth);
            let points = earth.get_trail().iter().map(|p| p.0).collect::<Vec<_>>();
            assert!(
                points.windows(2).all(|w| (w[0] - w[1]).length() > 1.0),
                "{}: planet stopped moving: {:?}",
                policy,
                points
            );
            let expected = (-1.0f64).rem_euclid(FULL_ROTATION);
            assert!(angular_distance(earth.get_angle().0, expected) < 1e-9, "{}", policy);
        }
    }

    #[test]
    fn test_reset_policy_folds_negative_angles() {
        let angle = WrapPolicy::Reset.wrap(OrbitAngle(-0.5));
        assert!((angle.0 - (FULL_ROTATION - 0.5)).abs() < 1e-12);
        assert_eq!(WrapPolicy::Reset.wrap(OrbitAngle(FULL_ROTATION + 0.5)), OrbitAngle(0.0));
    }

    #[test]
    fn test_trail_is_capped_and_records_positions() {
        let mut solar_system = SolarSystem::default();
        for _ in 0..1000 {
            solar_system.tick(CENTER);
        }
        for planet in solar_system.get_planets() {
            assert_eq!(planet.get_trail().len(), DEFAULT_TRAIL_CAPACITY);
        }
    }

    #[test]
    fn test_first_tick_records_angle_zero_position() {
        let mut solar_system = SolarSystem::default();
        assert_eq!(solar_system.get_planet(PlanetKind::Venus).get_position(), None);
        solar_system.tick(CENTER);
        let venus = solar_system.get_planet(PlanetKind::Venus);
        // The position is recorded before the angle advances
        assert_approx_eq_v2!(venus.get_position().unwrap().0, Vec2::new(610.0, 400.0));
        assert!((venus.get_angle().0 - 0.004).abs() < 1e-12);
    }

    #[test]
    fn test_center_is_used_each_tick() {
        let mut solar_system = SolarSystemBuilder::new()
            .orbit(PlanetKind::Mars, OrbitalDistance(200.0), AngularSpeed(0.0))
            .build();
        solar_system.tick(ScreenCoord::new(300.0, 300.0));
        solar_system.tick(ScreenCoord::new(800.0, 100.0));
        let trail = solar_system.get_planet(PlanetKind::Mars).get_trail();
        let points = trail.iter().map(|p| p.0).collect::<Vec<_>>();
        assert_approx_eq_v2!(points[0], Vec2::new(500.0, 300.0));
        assert_approx_eq_v2!(points[1], Vec2::new(1000.0, 100.0));
    }

    #[test]
    fn test_builder_settings() {
        let solar_system = SolarSystemBuilder::new()
            .trail_capacity(10)
            .tick_interval(Duration::from_millis(16))
            .build();
        assert_eq!(solar_system.get_tick_interval(), Duration::from_millis(16));
        assert_eq!(solar_system.get_wrap_policy(), WrapPolicy::Carry);
        for (i, planet) in solar_system.get_planets().iter().enumerate() {
            assert_eq!(planet.get_kind().index(), i);
            assert_eq!(planet.get_trail().capacity(), 10);
            assert_eq!(planet.get_distance(), planet.get_kind().default_distance());
        }
    }

    #[test]
    fn test_clock_counts_ticks() {
        let mut solar_system = SolarSystem::default();
        for _ in 0..200 {
            solar_system.tick(CENTER);
        }
        assert_eq!(solar_system.get_clock().get_current_tick(), 200);
        assert_eq!(solar_system.get_clock().get_current_time(), Duration::from_secs(1));
    }
}
