//! Handler für Fahrzeuge und Selektion.

use anyhow::Result;
use glam::Vec2;

use crate::app::AppState;
use crate::core::{VehicleId, VehicleRole};

/// Fügt ein Fahrzeug hinzu; die Position wird vom Modell beschränkt.
pub fn add_vehicle(state: &mut AppState, role: VehicleRole, pos: Vec2) -> Result<()> {
    let id = state.scene.add_vehicle(role, pos).inspect_err(|e| {
        log::warn!("Fahrzeug nicht hinzugefügt: {}", e);
    })?;
    state.view.mark_frame_dirty();
    log::info!("NPC {} hinzugefügt", id);
    Ok(())
}

/// Entfernt ein Fahrzeug. Das Ego-Fahrzeug wird abgelehnt (`ProtectedEntity`).
pub fn remove_vehicle(state: &mut AppState, vehicle_id: VehicleId) -> Result<()> {
    state.scene.remove_vehicle(vehicle_id).inspect_err(|e| {
        log::warn!("Fahrzeug nicht entfernt: {}", e);
    })?;
    state.view.mark_frame_dirty();
    log::info!("Fahrzeug {} entfernt", vehicle_id);
    Ok(())
}

/// Setzt oder hebt die Selektion auf.
pub fn set_selection(state: &mut AppState, vehicle_id: Option<VehicleId>) -> Result<()> {
    if state.scene.selected_vehicle_id() == vehicle_id {
        return Ok(());
    }
    state.scene.set_selection(vehicle_id)?;
    state.view.mark_frame_dirty();
    Ok(())
}

/// Setzt die Szene zurück und beendet einen laufenden Drag.
pub fn initialize(state: &mut AppState) {
    state.interaction.reset();
    state.scene.initialize();
    state.view.mark_frame_dirty();
}
