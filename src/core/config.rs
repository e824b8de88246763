//! Szenen-Konfiguration: Canvas-Größe, Straßenrand, Fahrzeugmaße.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, RoadDimensions};

/// Standard-Canvas-Breite in Pixeln.
pub const DEFAULT_CANVAS_WIDTH: f32 = 1100.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 520.0;
/// Abstand der Fahrbahn vom oberen/unteren Rand.
pub const DEFAULT_ROAD_MARGIN: f32 = 60.0;
pub const DEFAULT_LANE_COUNT: u32 = 3;
pub const DEFAULT_VEHICLE_WIDTH: f32 = 70.0;
pub const DEFAULT_VEHICLE_HEIGHT: f32 = 36.0;
/// Zusätzlicher vertikaler Innenabstand des befahrbaren Bereichs.
pub const DEFAULT_DRIVABLE_PAD: f32 = 20.0;
/// X-Position des Ego-Fahrzeugs nach dem Initialisieren.
pub const EGO_START_X: f32 = 350.0;

/// Konstruktor-Parameter des Szenenmodells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub road_margin: f32,
    pub lane_count: u32,
    pub vehicle_width: f32,
    pub vehicle_height: f32,
    pub drivable_pad: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            road_margin: DEFAULT_ROAD_MARGIN,
            lane_count: DEFAULT_LANE_COUNT,
            vehicle_width: DEFAULT_VEHICLE_WIDTH,
            vehicle_height: DEFAULT_VEHICLE_HEIGHT,
            drivable_pad: DEFAULT_DRIVABLE_PAD,
        }
    }
}

impl SceneConfig {
    /// Abmessungen für die Geometrie-Funktionen.
    pub fn road_dimensions(&self) -> RoadDimensions {
        RoadDimensions {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            road_margin: self.road_margin,
            lane_count: self.lane_count,
        }
    }

    /// Fahrzeuggröße als Vektor (Breite, Höhe).
    pub fn vehicle_size(&self) -> Vec2 {
        Vec2::new(self.vehicle_width, self.vehicle_height)
    }

    /// Canvas-Größe in ganzen Pixeln (mindestens 1×1).
    pub fn canvas_size_px(&self) -> (u32, u32) {
        (
            self.canvas_width.round().max(1.0) as u32,
            self.canvas_height.round().max(1.0) as u32,
        )
    }

    /// Bereich, in dem Fahrzeugmittelpunkte liegen dürfen.
    ///
    /// `x ∈ [w/2, W − w/2]`, `y ∈ [margin + pad, H − margin − pad]`.
    /// Bei zu kleinem Canvas fällt der Bereich auf dessen Mittellinie zusammen.
    pub fn drivable_bounds(&self) -> Rect {
        let half_width = self.vehicle_width / 2.0;
        let min = Vec2::new(half_width, self.road_margin + self.drivable_pad);
        let max = Vec2::new(
            self.canvas_width - half_width,
            self.canvas_height - self.road_margin - self.drivable_pad,
        );
        let center = (min + max) / 2.0;
        Rect::new(min.min(center), max.max(center))
    }

    /// Startposition des Ego-Fahrzeugs.
    pub fn ego_start_position(&self) -> Vec2 {
        Vec2::new(EGO_START_X, self.canvas_height / 2.0)
    }
}
