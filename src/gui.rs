//! This module contains all the GUI related code.
//! Things that are drawn to via screen coordinates rather than world coordinates.

use bevy::app::{App, Plugin, Update};

pub mod info_window;

/// Expects `EguiPlugin` and `FrameTimeDiagnosticsPlugin` to be added by the app
pub struct GuiPlugin;

impl Plugin for GuiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, info_window::info_window_system);
    }
}
