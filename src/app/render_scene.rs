//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let scene = &state.scene;

    RenderScene {
        layout: scene.road_layout(),
        vehicles: scene.vehicles().cloned().collect(),
        selected_vehicle_id: scene.selected_vehicle_id(),
        config: *scene.config(),
        palette: state.options.palette,
    }
}
