//! This module contains everything that is drawn in world space.
//! It reads the simulation state and turns it into bevy entities and gizmos.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod camera;
pub mod celestials;
pub mod starfield;
pub mod utils;

pub struct EntitiesPluginGroup;

impl PluginGroup for EntitiesPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(camera::CameraPlugin)
            .add(starfield::StarfieldPlugin)
            .add(celestials::sun::SunPlugin)
            .add(celestials::planet::PlanetPlugin)
    }
}
