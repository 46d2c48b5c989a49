use bevy::{
    app::{App, Plugin, Startup, Update},
    asset::Assets,
    ecs::{
        component::Component,
        entity::Entity,
        event::EventReader,
        query::With,
        system::{Commands, Query, Res, ResMut, Resource},
    },
    log::{debug, info},
    render::{color::Color, mesh::Mesh},
    sprite::{ColorMaterial, MaterialMesh2dBundle},
    transform::components::Transform,
    window::{PrimaryWindow, Window, WindowResized},
};

use crate::{
    entities::utils::{latest_window_size, Radius},
    physics::util::vectors::ScreenSize,
};

/// Drawn above the stars and below the planets
pub const SUN_Z: f32 = 1.0;

/// Marks the sun entity
#[derive(Component, Debug, Clone, Copy)]
pub struct Sun;

/// Configures the sun. Insert a customised one before adding [`SunPlugin`] to change it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SunBuilder {
    radius: f32,
    color: Color,
}

impl Default for SunBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SunBuilder {
    pub fn new() -> Self {
        Self {
            radius: 50.0,
            color: Color::rgb(1.0, 0.85, 0.0),
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Spawns the sun at the middle of a window of the given size
    pub fn build(
        &self,
        size: ScreenSize,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<ColorMaterial>,
    ) -> Entity {
        let radius = Radius(self.radius);
        commands
            .spawn((
                Sun,
                radius,
                MaterialMesh2dBundle {
                    mesh: meshes.add(radius.calc_mesh()).into(),
                    material: materials.add(ColorMaterial::from(self.color)),
                    transform: Transform::from_translation(size.center().to_world(SUN_Z)),
                    ..Default::default()
                },
            ))
            .id()
    }
}

/// Spawns the sun and keeps it in the middle of the window
pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SunBuilder>();
        app.add_systems(Startup, Self::setup);
        app.add_systems(Update, Self::recenter_system);
    }
}

/// Bevy Systems
impl SunPlugin {
    pub fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<ColorMaterial>>,
        sun_builder: Res<SunBuilder>,
        windows: Query<&Window, With<PrimaryWindow>>,
    ) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        sun_builder.build(ScreenSize::from(window), &mut commands, &mut meshes, &mut materials);
        info!("Spawned the sun");
    }

    /// The sun is moved, never resized
    pub fn recenter_system(
        mut resize_events: EventReader<WindowResized>,
        mut sun: Query<&mut Transform, With<Sun>>,
    ) {
        let Some(size) = latest_window_size(&mut resize_events) else {
            return;
        };
        for mut transform in sun.iter_mut() {
            transform.translation = size.center().to_world(SUN_Z);
        }
        debug!("Recentered the sun to {}", size.center());
    }
}
