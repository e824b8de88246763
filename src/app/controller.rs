//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger-Interaktion ===
            AppCommand::PointerDown { pos } => handlers::interaction::pointer_down(state, pos)?,
            AppCommand::PointerMove { pos } => handlers::interaction::pointer_move(state, pos),
            AppCommand::PointerUp => handlers::interaction::pointer_up(state),

            // === Szene ===
            AppCommand::SetRoadLayout { layout } => handlers::view::set_road_layout(state, layout),
            AppCommand::AddVehicle { role, pos } => handlers::scene::add_vehicle(state, role, pos)?,
            AppCommand::RemoveVehicle { vehicle_id } => {
                handlers::scene::remove_vehicle(state, vehicle_id)?
            }
            AppCommand::SetSelection { vehicle_id } => {
                handlers::scene::set_selection(state, vehicle_id)?
            }
            AppCommand::InitializeScene => handlers::scene::initialize(state),

            // === Export ===
            AppCommand::RequestExportDialog => handlers::dialog::request_export_dialog(state),
            AppCommand::ExportFrame { path } => handlers::export::export_frame(state, path)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
