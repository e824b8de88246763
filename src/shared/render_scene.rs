//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::RenderPalette;
use crate::core::{RoadLayout, SceneConfig, Vehicle, VehicleId};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Aktives Straßenlayout
    pub layout: RoadLayout,
    /// Fahrzeuge in Zeichenreihenfolge (unten zuerst)
    pub vehicles: Vec<Vehicle>,
    /// Selektiertes Fahrzeug (wird zuletzt hervorgehoben)
    pub selected_vehicle_id: Option<VehicleId>,
    /// Canvas- und Fahrzeugmaße
    pub config: SceneConfig,
    /// Farben
    pub palette: RenderPalette,
}

impl RenderScene {
    /// Das selektierte Fahrzeug, falls vorhanden.
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        let id = self.selected_vehicle_id?;
        self.vehicles.iter().find(|v| v.id == id)
    }
}
