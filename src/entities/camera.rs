//! The bevy camera for the game

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::{
    app::{App, Plugin, Startup, Update},
    core_pipeline::{
        clear_color::ClearColorConfig,
        core_2d::{Camera2d, Camera2dBundle},
    },
    ecs::{
        component::Component,
        event::EventReader,
        query::With,
        system::{Commands, Query},
    },
    render::color::Color,
    transform::components::Transform,
    window::{PrimaryWindow, Window, WindowResized},
};

use crate::physics::util::vectors::ScreenSize;

use super::utils::latest_window_size;

/// Used to help identify our main camera
#[derive(Component)]
pub struct MainCamera;

/// Keeps screen coordinate `(0, 0)` at the top left corner of the window.
/// The camera looks at the window center, so on resize it moves with it.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    /// Build the camera plugin
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup_main_camera);
        app.add_systems(Update, Self::follow_resize_system);
    }
}

/// Bevy Systems
impl CameraPlugin {
    /// Setup the main camera over the middle of the window
    pub fn setup_main_camera(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
        let mut camera = Camera2dBundle {
            camera_2d: Camera2d {
                clear_color: ClearColorConfig::Custom(Color::rgb(0.0, 0.0, 0.0)),
            },
            ..Default::default()
        };
        if let Ok(window) = windows.get_single() {
            Self::center_on(&mut camera.transform, ScreenSize::from(window));
        }
        commands.spawn((camera, MainCamera));
    }

    /// Recenter the camera when the window is resized
    pub fn follow_resize_system(
        mut resize_events: EventReader<WindowResized>,
        mut camera: Query<&mut Transform, With<MainCamera>>,
    ) {
        let Some(size) = latest_window_size(&mut resize_events) else {
            return;
        };
        for mut transform in camera.iter_mut() {
            Self::center_on(&mut transform, size);
        }
    }

    /// Moves the transform over the window center, keeping its depth
    fn center_on(transform: &mut Transform, size: ScreenSize) {
        let z = transform.translation.z;
        transform.translation = size.center().to_world(z);
    }
}
