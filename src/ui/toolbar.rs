//! Toolbar mit Layout-Auswahl und Szenen-Aktionen.

use crate::app::{AppIntent, AppState};
use crate::core::RoadLayout;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Layout:");

            let current = state.scene.road_layout();
            let mut selected = current;
            egui::ComboBox::from_id_salt("road_layout_dropdown")
                .selected_text(current.label())
                .width(160.0)
                .show_ui(ui, |ui| {
                    for layout in RoadLayout::ALL {
                        ui.selectable_value(&mut selected, layout, layout.label());
                    }
                });
            if selected != current {
                events.push(AppIntent::RoadLayoutSelected { layout: selected });
            }

            ui.separator();

            if ui.button("NPC hinzufügen").clicked() {
                events.push(AppIntent::AddNpcRequested);
            }

            let remove = ui.add_enabled(state.has_selection(), egui::Button::new("Auswahl löschen"));
            if remove.clicked() {
                events.push(AppIntent::RemoveSelectedRequested);
            }

            ui.separator();

            if ui.button("Exportieren …").clicked() {
                events.push(AppIntent::ExportRequested);
            }

            if ui.button("Neue Szene").clicked() {
                events.push(AppIntent::NewSceneRequested);
            }
        });

        ui.label(
            egui::RichText::new(
                "Fahrzeug anklicken zum Auswählen, ziehen zum Verschieben. \
                 Entf löscht die Auswahl, Esc hebt sie auf.",
            )
            .small()
            .weak(),
        );
    });

    events
}
