//! Circular orbits on a fixed timestep.

use bevy::{
    app::{App, FixedUpdate, Plugin},
    ecs::{
        query::With,
        system::{Query, ResMut},
    },
    time::{Fixed, Time},
    window::{PrimaryWindow, Window},
};

use crate::physics::util::vectors::ScreenSize;

use self::solar_system::SolarSystem;

pub mod components;
pub mod solar_system;
pub mod trail;

/// Advances the [`SolarSystem`] resource once per fixed tick.
/// Insert a customised `SolarSystem` before adding this plugin to change the defaults.
pub struct OrbitsPlugin;

impl Plugin for OrbitsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarSystem>();
        let interval = app.world.resource::<SolarSystem>().get_tick_interval();
        app.insert_resource(Time::<Fixed>::from_duration(interval));
        app.add_systems(FixedUpdate, OrbitsPlugin::tick_system);
    }
}

/// Bevy Systems
impl OrbitsPlugin {
    /// Moves every planet one step along its orbit, around the center of the primary window
    pub fn tick_system(
        windows: Query<&Window, With<PrimaryWindow>>,
        mut solar_system: ResMut<SolarSystem>,
    ) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        let center = ScreenSize::from(window).center();
        solar_system.tick(center);
    }
}
