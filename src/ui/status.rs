//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Layout: {}", state.scene.road_layout().label()));

            ui.separator();

            ui.label(format!(
                "Fahrzeuge: {} (NPCs: {})",
                state.vehicle_count(),
                state.scene.npc_count()
            ));

            ui.separator();

            match state.scene.selected_vehicle() {
                Some(vehicle) => ui.label(format!(
                    "Ausgewählt: {} bei ({:.0}, {:.0})",
                    vehicle.label(),
                    vehicle.position.x,
                    vehicle.position.y
                )),
                None => ui.label("Keine Auswahl"),
            };

            if state.interaction.is_dragging() {
                ui.separator();
                ui.label("Verschieben …");
            }
        });
    });
}
