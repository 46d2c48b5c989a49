use bevy::{
    ecs::{component::Component, event::EventReader},
    render::mesh::{shape, Mesh},
    window::WindowResized,
};

use crate::physics::util::vectors::ScreenSize;

/// Radius for circular entities
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Radius(pub f32);

impl Radius {
    /// Calculate the mesh for the filled circle described by the radius
    pub fn calc_mesh(self) -> Mesh {
        const NB_VERTICES: usize = 100;
        shape::Circle {
            radius: self.0,
            vertices: NB_VERTICES,
        }
        .into()
    }
}

/// Drains the resize events and returns the newest window size, if any.
/// Several resizes can land in one frame while the user drags the window edge,
/// only the last one matters.
pub fn latest_window_size(resize_events: &mut EventReader<WindowResized>) -> Option<ScreenSize> {
    resize_events
        .read()
        .last()
        .map(|event| ScreenSize::new(event.width, event.height))
}
