//! Fahrzeug-Entität mit Rolle und Position.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Rect;

/// Eindeutige, monoton vergebene Fahrzeug-ID (ab 1).
pub type VehicleId = u64;

/// Rolle eines Fahrzeugs in der Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleRole {
    /// Das eigene Fahrzeug (genau eines pro Szene)
    Ego,
    /// Weitere Verkehrsteilnehmer
    Npc,
}

impl fmt::Display for VehicleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleRole::Ego => f.write_str("ego"),
            VehicleRole::Npc => f.write_str("npc"),
        }
    }
}

/// Ein Fahrzeug-Marker auf dem Canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub role: VehicleRole,
    /// Mittelpunkt in Canvas-Koordinaten
    pub position: Vec2,
}

impl Vehicle {
    pub fn new(id: VehicleId, role: VehicleRole, position: Vec2) -> Self {
        Self { id, role, position }
    }

    pub fn is_ego(&self) -> bool {
        self.role == VehicleRole::Ego
    }

    /// Bounding-Box der Größe `size`, zentriert auf der Position.
    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::from_center_size(self.position, size)
    }

    /// Beschriftung im Marker: `"ego"` bzw. `"NPC <id>"`.
    pub fn label(&self) -> String {
        match self.role {
            VehicleRole::Ego => "ego".to_string(),
            VehicleRole::Npc => format!("NPC {}", self.id),
        }
    }
}
