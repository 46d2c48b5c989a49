//! This module contains all the simulation code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * Keep the simulation state free of rendering. Systems that draw read it, they never write it.
//! * Physics should be highly unit tested.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod orbits;
pub mod util;

pub struct PhysicsPluginGroup;

impl PluginGroup for PhysicsPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(orbits::OrbitsPlugin)
    }
}
