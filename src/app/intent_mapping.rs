//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::VehicleRole;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::PointerDown { pos }],
        AppIntent::PointerMoved { pos } => vec![AppCommand::PointerMove { pos }],
        AppIntent::PointerReleased => vec![AppCommand::PointerUp],
        AppIntent::RoadLayoutSelected { layout } => {
            if layout == state.scene.road_layout() {
                vec![]
            } else {
                vec![AppCommand::SetRoadLayout { layout }]
            }
        }
        AppIntent::AddNpcRequested => {
            let pos = state.options.npc_spawn_position(state.scene.npc_count());
            vec![AppCommand::AddVehicle {
                role: VehicleRole::Npc,
                pos,
            }]
        }
        AppIntent::RemoveSelectedRequested => match state.scene.selected_vehicle_id() {
            Some(vehicle_id) => vec![AppCommand::RemoveVehicle { vehicle_id }],
            None => {
                log::info!("Kein Fahrzeug selektiert, nichts zu entfernen");
                vec![]
            }
        },
        AppIntent::ClearSelectionRequested => vec![AppCommand::SetSelection { vehicle_id: None }],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportFrame { path }],
        AppIntent::NewSceneRequested => vec![AppCommand::InitializeScene],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
