//! Straßen-Geometrie für die drei festen Layouts.
//!
//! Reine Funktionen ohne Zustand: aus `RoadDimensions` werden Rechtecke,
//! Segmente und Kontrollpunkte berechnet. Kurven liegen nur als
//! Kontrollpunkte vor, die Glättung übernimmt der Renderer.

mod layouts;


use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use layouts::{geometry_for, merge_in_geometry, merge_out_geometry, straight_road_geometry};

/// Höhe der Randstreifen oben und unten auf der Fahrbahn.
pub const SHOULDER_HEIGHT: f32 = 18.0;
/// Horizontaler Abstand der Fahrbahnfläche vom Canvas-Rand.
pub const ROAD_SIDE_INSET: f32 = 40.0;
/// Horizontaler Abstand der Spurmarkierungen vom Canvas-Rand.
pub const LANE_MARK_INSET: f32 = 60.0;

/// Auswählbares Straßenlayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoadLayout {
    /// Dreispurige gerade Strecke
    #[default]
    Straight,
    /// Auffahrt: Rampe mündet in die Hauptfahrbahn
    MergeIn,
    /// Ausfahrt: Rampe zweigt von der Hauptfahrbahn ab
    MergeOut,
}

impl RoadLayout {
    /// Alle Layouts in Anzeige-Reihenfolge.
    pub const ALL: [RoadLayout; 3] = [RoadLayout::Straight, RoadLayout::MergeIn, RoadLayout::MergeOut];

    /// Anzeigename für die Layout-Auswahl.
    pub fn label(self) -> &'static str {
        match self {
            RoadLayout::Straight => "Gerade Strecke",
            RoadLayout::MergeIn => "Auffahrt",
            RoadLayout::MergeOut => "Ausfahrt",
        }
    }
}

/// Abmessungen, aus denen die Geometrie abgeleitet wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadDimensions {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Abstand der Fahrbahnkante vom oberen/unteren Canvas-Rand
    pub road_margin: f32,
    pub lane_count: u32,
}

/// Achsenparalleles Rechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Erstellt ein Rechteck aus zwei Ecken.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rechteck der Größe `size`, zentriert auf `center`.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Punkt-im-Rechteck-Test, Kanten eingeschlossen.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Vergrößert das Rechteck auf allen Seiten um `amount`.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Beschränkt einen Punkt auf das Rechteck.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Ecken im Uhrzeigersinn (Bildkoordinaten), beginnend oben links.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// Gerades Linienstück.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Start- und Endpunkt als Punktfolge.
    pub fn points(&self) -> [Vec2; 2] {
        [self.start, self.end]
    }
}

/// Geometrie der geraden Hauptfahrbahn.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightRoad {
    /// Fahrbahnfläche
    pub surface: Rect,
    /// Randstreifen oben und unten (innerhalb der Fahrbahnfläche)
    pub shoulder_bands: [Rect; 2],
    /// Gestrichelte Trennlinien zwischen den Spuren
    pub lane_dividers: Vec<Segment>,
    /// Obere und untere Fahrbahnkante
    pub outer_edges: [Segment; 2],
}

/// Auf- oder Abfahrtsrampe aus zwei Kanten mit je vier Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    /// Äußere Kante: Start, zwei Zwischenpunkte, Ende
    pub outer_edge: [Vec2; 4],
    /// Innere Kante zur Hauptfahrbahn hin
    pub inner_edge: [Vec2; 4],
}

impl Ramp {
    /// Geschlossene Kontur: äußere Kante, danach innere Kante rückwärts.
    pub fn polygon(&self) -> [Vec2; 8] {
        let [o0, o1, o2, o3] = self.outer_edge;
        let [i0, i1, i2, i3] = self.inner_edge;
        [o0, o1, o2, o3, i3, i2, i1, i0]
    }
}

/// Vollständige Geometrie eines Layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadGeometry {
    pub road: StraightRoad,
    /// Nur bei Auf-/Ausfahrt vorhanden
    pub ramp: Option<Ramp>,
    /// Kurzes Verbindungsstück am Abzweig (nur Ausfahrt)
    pub connector: Option<Segment>,
}
