//! Handler für die Darstellung: Straßenlayout.

use crate::app::AppState;
use crate::core::RoadLayout;

/// Wechselt das Straßenlayout; Fahrzeuge bleiben unverändert.
pub fn set_road_layout(state: &mut AppState, layout: RoadLayout) {
    state.scene.set_road_layout(layout);
    state.view.mark_frame_dirty();
    log::info!("Straßenlayout gewechselt: {:?}", layout);
}
