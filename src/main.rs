use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_egui::EguiPlugin;
use planets_orbit::entities::EntitiesPluginGroup;
use planets_orbit::gui::GuiPlugin;
use planets_orbit::physics::orbits::solar_system::SolarSystemBuilder;
use planets_orbit::physics::PhysicsPluginGroup;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,planets_orbit=debug".to_string(),
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Planets Orbit".to_string(),
                        resolution: WindowResolution::new(1000.0, 1000.0),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .insert_resource(SolarSystemBuilder::new().build())
        .add_plugins(PhysicsPluginGroup)
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(GuiPlugin)
        .run();
}
