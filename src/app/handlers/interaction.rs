//! Handler für Pointer-Ereignisse auf dem Canvas.

use anyhow::Result;
use glam::Vec2;

use crate::app::AppState;
use crate::core::SceneError;

/// Pointer gedrückt: Hit-Test, Selektion, ggf. Drag-Start. Zeichnet immer neu.
pub fn pointer_down(state: &mut AppState, pos: Vec2) -> Result<()> {
    let hit = state.interaction.pointer_down(&mut state.scene, pos)?;
    log::debug!("Pointer-Down bei {:?}: Treffer {:?}", pos, hit);
    state.view.mark_frame_dirty();
    Ok(())
}

/// Pointer bewegt: verschiebt das gezogene Fahrzeug, ohne Drosselung.
///
/// Verschwindet das gezogene Fahrzeug während des Drags, endet der Drag still.
pub fn pointer_move(state: &mut AppState, pos: Vec2) {
    match state.interaction.pointer_move(&mut state.scene, pos) {
        Ok(Some(_)) => state.view.mark_frame_dirty(),
        Ok(None) => {}
        Err(SceneError::NotFound { vehicle_id }) => {
            log::warn!("Gezogenes Fahrzeug {} existiert nicht mehr, Drag beendet", vehicle_id);
        }
        Err(e) => log::warn!("Pointer-Move abgelehnt: {}", e),
    }
}

/// Pointer losgelassen: beendet den Drag mit einem letzten Neuzeichnen.
pub fn pointer_up(state: &mut AppState) {
    if state.interaction.pointer_up() {
        state.view.mark_frame_dirty();
    }
}
