use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::system::Res,
};
use bevy_egui::{
    egui::{self, Grid},
    EguiContexts,
};

use crate::physics::orbits::solar_system::SolarSystem;

/// A read only window with the frame rate and the state of every planet
pub fn info_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    solar_system: Res<SolarSystem>,
) {
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    let clock = solar_system.get_clock();
    egui::Window::new("Solar System")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(format!("FPS: {:.0}", fps));
            ui.label(format!("Ticks: {}", clock.get_current_tick()));
            ui.label(format!(
                "Simulated time: {:.1}s",
                clock.get_current_time().as_secs_f64()
            ));
            ui.separator();
            Grid::new("planets").striped(true).show(ui, |ui| {
                ui.label("Planet");
                ui.label("Angle");
                ui.label("Trail");
                ui.end_row();
                for planet in solar_system.get_planets() {
                    ui.label(planet.get_kind().to_string());
                    ui.label(format!("{:.1}°", planet.get_angle().degrees()));
                    ui.label(planet.get_trail().len().to_string());
                    ui.end_row();
                }
            });
        });
}
