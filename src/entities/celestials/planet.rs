use bevy::{
    app::{App, Plugin, Startup, Update},
    asset::Assets,
    ecs::{
        component::Component,
        query::With,
        system::{Commands, Query, Res, ResMut},
    },
    gizmos::gizmos::Gizmos,
    log::info,
    math::Vec2,
    render::{color::Color, mesh::Mesh},
    sprite::{ColorMaterial, MaterialMesh2dBundle},
    transform::components::Transform,
    window::{PrimaryWindow, Window},
};
use itertools::Itertools;

use crate::{
    entities::utils::Radius,
    physics::{
        orbits::{components::PlanetKind, solar_system::SolarSystem, trail::Trail},
        util::vectors::{ScreenCoord, ScreenSize},
    },
};

/// Drawn above the sun
pub const PLANET_Z: f32 = 2.0;

/// Links a rendered planet to its entry in the [`SolarSystem`]
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planet(pub PlanetKind);

/// Draws the planets and their trails from the [`SolarSystem`] state
pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
        app.add_systems(Update, (Self::sync_transform_system, Self::draw_trail_system));
    }
}

/// Bevy Systems
impl PlanetPlugin {
    /// One filled circle per planet, parked at the window center until the first tick
    pub fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<ColorMaterial>>,
        windows: Query<&Window, With<PrimaryWindow>>,
    ) {
        let center = windows
            .get_single()
            .map(|window| ScreenSize::from(window).center())
            .unwrap_or(ScreenCoord::ZERO);
        for kind in PlanetKind::ALL {
            let radius = Radius(kind.render_radius());
            commands.spawn((
                Planet(kind),
                radius,
                MaterialMesh2dBundle {
                    mesh: meshes.add(radius.calc_mesh()).into(),
                    material: materials.add(ColorMaterial::from(kind.color())),
                    transform: Transform::from_translation(center.to_world(PLANET_Z)),
                    ..Default::default()
                },
            ));
        }
        info!("Spawned {} planets", PlanetKind::ALL.len());
    }

    /// Moves each planet entity to the position computed on the last tick
    pub fn sync_transform_system(
        solar_system: Res<SolarSystem>,
        mut planets: Query<(&Planet, &mut Transform)>,
    ) {
        for (planet, mut transform) in planets.iter_mut() {
            if let Some(position) = solar_system.get_planet(planet.0).get_position() {
                transform.translation = position.to_world(PLANET_Z);
            }
        }
    }

    /// Draws each trail as a line that fades out towards its oldest point
    pub fn draw_trail_system(solar_system: Res<SolarSystem>, mut gizmos: Gizmos) {
        for planet in solar_system.get_planets() {
            let color = planet.get_kind().color();
            for (start, end, segment_color) in trail_segments(planet.get_trail(), color) {
                gizmos.line_2d(start, end, segment_color);
            }
        }
    }
}

/// World space line segments between consecutive trail points.
/// The newest segment is opaque and alpha falls off linearly towards the oldest.
pub fn trail_segments(trail: &Trail, color: Color) -> Vec<(Vec2, Vec2, Color)> {
    let nb_segments = trail.len().saturating_sub(1);
    trail
        .iter()
        .map(|point| point.to_world_2d())
        .tuple_windows()
        .enumerate()
        .map(|(i, (start, end))| {
            let alpha = (i + 1) as f32 / nb_segments as f32;
            (start, end, color.with_a(alpha))
        })
        .collect()
}
